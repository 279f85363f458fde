//! Egret 工程导入
//!
//! 1. 把 `resource/` 复制到目标资源库下的同名目录（重名时追加 `_1`、`_2` ...）
//! 2. 识别 JSON 配置、转换 JSON 位图字体，其余文件原样复制
//! 3. 由配置构建皮肤表和资源表，先编译主题中的皮肤，再编译其它 EXML

use crate::compiler::{CompileReport, ExmlCompiler, FsArtifactStore};
use crate::config::{
    normalize_path, CompilerOptions, JsonKind, ResourceConfig, ResourceTable, SkinTable, ThemeConfig,
};
use crate::error::{ImportError, Result};
use crate::resource::{BitmapFont, FsResourceLocator};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// 工程中的资源目录名
pub const RESOURCE_DIR: &str = "resource";

#[derive(Debug, Clone)]
pub struct ProjectReport {
    /// 实际使用的目标目录
    pub target_root: PathBuf,
    /// 复制到目标目录的文件
    pub copied: Vec<PathBuf>,
    /// 由 JSON 字体转换得到的 .fnt 文件
    pub converted_fonts: Vec<PathBuf>,
    /// 识别出的动画配置
    pub animation_configs: Vec<PathBuf>,
    pub compile: CompileReport,
}

/// 扫描 resource 目录时收集的信息
#[derive(Default)]
struct Scan {
    exmls: Vec<PathBuf>,
    themes: Vec<ThemeConfig>,
    resource_configs: Vec<ResourceConfig>,
    animation_configs: Vec<PathBuf>,
    copied: Vec<PathBuf>,
    converted_fonts: Vec<PathBuf>,
}

pub struct ProjectImporter {
    project_dir: PathBuf,
    assets_root: PathBuf,
    options: CompilerOptions,
}

impl ProjectImporter {
    pub fn new(project_dir: impl Into<PathBuf>, assets_root: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            assets_root: assets_root.into(),
            options: CompilerOptions::default(),
        }
    }

    /// 使用给定选项的 `target_url` 与 `y_axis`；源/输出目录由导入器决定
    pub fn with_options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self) -> Result<ProjectReport> {
        let resource_dir = self.project_dir.join(RESOURCE_DIR);
        if !resource_dir.is_dir() {
            return Err(ImportError::MissingResourceDir(resource_dir));
        }

        let project_name = self
            .project_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());
        let (folder_name, target_root) = unique_target(&self.assets_root, &project_name);
        fs::create_dir_all(&target_root).map_err(|e| ImportError::io(&target_root, e))?;

        tracing::info!(
            "Importing Egret project {} into {}",
            self.project_dir.display(),
            target_root.display()
        );

        let mut scan = Scan::default();
        copy_resources(&resource_dir, &target_root, &mut scan)?;
        tracing::info!(
            "Copied {} files, converted {} fonts, found {} EXML files",
            scan.copied.len(),
            scan.converted_fonts.len(),
            scan.exmls.len()
        );

        let mut skins = SkinTable::new();
        for theme in &scan.themes {
            skins.extend_from_theme(theme, &self.project_dir);
        }
        let mut resources = ResourceTable::new();
        for config in &scan.resource_configs {
            resources.extend_from_config(config);
        }

        // 皮肤先编译，每个文件只出现一次
        let mut files: Vec<PathBuf> = skins.paths().into_iter().map(Path::to_path_buf).collect();
        for exml in scan.exmls {
            let exml = normalize_path(&exml);
            if !files.contains(&exml) {
                files.push(exml);
            }
        }

        let options = CompilerOptions {
            source_root: resource_dir,
            output_root: target_root.clone(),
            target_url: format!("{}/{}", self.options.target_url.trim_end_matches('/'), folder_name),
            y_axis: self.options.y_axis,
        };
        let mut locator = FsResourceLocator::new(&target_root);
        let mut store = FsArtifactStore::new();
        let compile = ExmlCompiler::new(options, &skins, &resources, &mut locator, &mut store).run(&files)?;

        tracing::info!("Import finished, resources are in {}", target_root.display());

        Ok(ProjectReport {
            target_root,
            copied: scan.copied,
            converted_fonts: scan.converted_fonts,
            animation_configs: scan.animation_configs,
            compile,
        })
    }
}

/// `<assets>/<name>`，已存在时依次尝试 `<name>_1`、`<name>_2` ...
fn unique_target(assets_root: &Path, name: &str) -> (String, PathBuf) {
    let mut folder = name.to_string();
    let mut i = 1;
    while assets_root.join(&folder).exists() {
        folder = format!("{}_{}", name, i);
        i += 1;
    }
    let path = assets_root.join(&folder);
    (folder, path)
}

fn copy_resources(src: &Path, dst: &Path, scan: &mut Scan) -> Result<()> {
    let mut entries = fs::read_dir(src)
        .map_err(|e| ImportError::io(src, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| ImportError::io(src, e))?;
    entries.sort();

    for path in entries {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = dst.join(file_name);

        if path.is_dir() {
            fs::create_dir_all(&target).map_err(|e| ImportError::io(&target, e))?;
            copy_resources(&path, &target, scan)?;
            continue;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("exml") => scan.exmls.push(path),
            Some("json") => handle_json(&path, &target, scan)?,
            Some("fnt") => handle_fnt(&path, &target, scan)?,
            _ => copy_if_absent(&path, &target, scan)?,
        }
    }
    Ok(())
}

/// 配置文件只收集不复制，普通 JSON 数据原样复制
fn handle_json(path: &Path, target: &Path, scan: &mut Scan) -> Result<()> {
    let classified = fs::read_to_string(path)
        .ok()
        .and_then(|text| JsonKind::classify_str(&text));

    match classified {
        Some((JsonKind::ResourceConfig, value)) => {
            if let Some(config) = decode_config::<ResourceConfig>(path, value) {
                scan.resource_configs.push(config);
            }
        }
        Some((JsonKind::ThemeConfig, value)) => {
            if let Some(theme) = decode_config::<ThemeConfig>(path, value) {
                scan.themes.push(theme);
            }
        }
        Some((JsonKind::AnimationConfig, _)) => {
            tracing::debug!("Animation config {}", path.display());
            scan.animation_configs.push(path.to_path_buf());
        }
        None => copy_if_absent(path, target, scan)?,
    }
    Ok(())
}

fn decode_config<T: DeserializeOwned>(path: &Path, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            None
        }
    }
}

/// JSON 字体转换为经典文本格式，其它 .fnt 原样复制
fn handle_fnt(path: &Path, target: &Path, scan: &mut Scan) -> Result<()> {
    let face = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let converted = fs::read_to_string(path)
        .ok()
        .and_then(|text| BitmapFont::from_egret_json(&text, &face).ok());

    match converted {
        Some(font) => {
            fs::write(target, font.to_classic()).map_err(|e| ImportError::io(target, e))?;
            scan.converted_fonts.push(target.to_path_buf());
            Ok(())
        }
        None => copy_if_absent(path, target, scan),
    }
}

fn copy_if_absent(path: &Path, target: &Path, scan: &mut Scan) -> Result<()> {
    if target.exists() {
        return Ok(());
    }
    fs::copy(path, target).map_err(|e| ImportError::io(target, e))?;
    scan.copied.push(target.to_path_buf());
    Ok(())
}
