//! EXML 导入命令行
//!
//! 用法：exml-import <project-dir> <assets-root> [--config <options.json>]

use exml_import::config::CompilerOptions;
use exml_import::project::ProjectImporter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: exml-import <project-dir> <assets-root> [--config <options.json>]";

struct Args {
    project_dir: PathBuf,
    assets_root: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    match <[PathBuf; 2]>::try_from(positional) {
        Ok([project_dir, assets_root]) => Ok(Args { project_dir, assets_root, config }),
        Err(_) => Err(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let options = match &args.config {
        Some(path) => match CompilerOptions::from_json_file(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("❌ {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => CompilerOptions::default(),
    };

    let report = match ProjectImporter::new(&args.project_dir, &args.assets_root)
        .with_options(options)
        .run()
    {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Import failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("✅ Imported into {}", report.target_root.display());
    println!("   copied files:     {}", report.copied.len());
    println!("   converted fonts:  {}", report.converted_fonts.len());
    println!("   animation config: {}", report.animation_configs.len());
    println!("   artifacts:        {}", report.compile.artifacts.len());
    for diag in &report.compile.diagnostics {
        println!("   ⚠️  {}", diag);
    }

    if report.compile.is_success() {
        ExitCode::SUCCESS
    } else {
        for skipped in &report.compile.skipped {
            eprintln!("❌ Skipped {}: {}", skipped.path.display(), skipped.reason);
        }
        ExitCode::FAILURE
    }
}
