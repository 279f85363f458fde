//! 工程导入测试：资源复制、配置识别、字体转换、EXML 编译

use super::support::*;
use crate::config::CompilerOptions;
use crate::error::ImportError;
use crate::project::ProjectImporter;
use serde_json::Value;

const EGRET_FONT: &str = r#"{ "file": "num.png", "frames": { "1": { "x": 0, "y": 0, "w": 12, "h": 20, "offX": 0, "offY": 0 } } }"#;

/// 搭建一个最小的 Egret 工程
fn setup_project(fx: &Fixture) -> std::path::PathBuf {
    fx.write(
        "game/resource/default.res.json",
        r#"{
            "groups": [{ "name": "preload", "keys": "bg_png" }],
            "resources": [
                { "name": "bg_png", "type": "image", "url": "assets/bg.png" },
                { "name": "num_fnt", "type": "font", "url": "fonts/num.fnt" }
            ]
        }"#,
    );
    fx.write(
        "game/resource/default.thm.json",
        r#"{
            "skins": { "eui.Button": "resource/eui_skins/ButtonSkin.exml" },
            "exmls": ["resource/eui_skins/ButtonSkin.exml"]
        }"#,
    );
    fx.write("game/resource/anim/hero.json", r#"{ "mc": { "run": {} }, "res": { "a": {} } }"#);
    fx.write("game/resource/data/levels.json", r#"{ "levels": [1, 2, 3] }"#);
    fx.write("game/resource/fonts/num.fnt", EGRET_FONT);
    fx.write("game/resource/fonts/plain.fnt", "info face=\"plain\" size=10\ncommon lineHeight=12");
    fx.write("game/resource/sounds/click.mp3", "mp3");
    std::fs::create_dir_all(fx.path("game/resource/assets")).unwrap();
    image::RgbaImage::new(40, 20).save(fx.path("game/resource/assets/bg.png")).unwrap();

    fx.write(
        "game/resource/eui_skins/ButtonSkin.exml",
        &format!(
            r#"<e:Skin {} width="100" height="40"><e:Image id="bg" source="bg_png"/></e:Skin>"#,
            EUI
        ),
    );
    fx.write(
        "game/resource/ui/Main.exml",
        &format!(
            r#"<e:Group {}>
                <e:Button id="start"/>
                <e:BitmapLabel id="score" font="num_fnt"/>
            </e:Group>"#,
            EUI
        ),
    );
    fx.write("game/resource/ui/Broken.exml", "<e:Group>");

    fx.path("game")
}

/// 测试完整工程导入
#[test]
fn test_project_import() {
    let fx = Fixture::new();
    let project = setup_project(&fx);
    let assets = fx.path("assets");

    let report = ProjectImporter::new(&project, &assets).run().unwrap();
    let target = assets.join("game");
    assert_eq!(report.target_root, target);

    // 配置文件不复制，普通 JSON 复制
    assert!(!target.join("default.res.json").exists());
    assert!(!target.join("default.thm.json").exists());
    assert!(target.join("data/levels.json").exists());
    assert!(target.join("assets/bg.png").exists());
    assert!(target.join("sounds/click.mp3").exists());
    assert_eq!(report.animation_configs.len(), 1);

    // JSON 字体被转换，经典字体原样复制
    assert_eq!(report.converted_fonts, vec![target.join("fonts/num.fnt")]);
    let converted = std::fs::read_to_string(target.join("fonts/num.fnt")).unwrap();
    assert!(converted.starts_with(r#"info face="num" size=12 "#));
    assert!(report.copied.contains(&target.join("fonts/plain.fnt")));

    // 皮肤先编译，损坏的文件被跳过
    let compile = &report.compile;
    assert_eq!(compile.artifacts.len(), 2);
    assert_eq!(compile.artifacts[0].url, "db://assets/game/eui_skins/ButtonSkin.prefab");
    assert_eq!(compile.artifacts[1].url, "db://assets/game/ui/Main.prefab");
    assert_eq!(compile.skipped.len(), 1);
    assert!(compile.skipped[0].path.ends_with("ui/Broken.exml"));
    assert!(!compile.is_success());

    let prefab: Value =
        serde_json::from_str(&std::fs::read_to_string(target.join("ui/Main.prefab")).unwrap()).unwrap();
    let start = &prefab["root"]["children"][0];
    assert_eq!(start["name"], "start");
    assert_eq!(start["skin"]["url"], "db://assets/game/eui_skins/ButtonSkin.prefab");
    assert_eq!(start["size"]["width"], 100.0);

    let score = &prefab["root"]["children"][1];
    assert_eq!(score["behaviors"][0]["type"], "Label");
    assert_eq!(score["behaviors"][0]["font_size"], 12.0);
    assert_eq!(score["behaviors"][0]["line_height"], 20.0);
    assert!(target.join("eui_skins/ButtonSkin.prefab").exists());
}

/// 测试目标目录已存在时追加序号
#[test]
fn test_target_folder_suffix() {
    let fx = Fixture::new();
    let project = setup_project(&fx);
    let assets = fx.path("assets");
    std::fs::create_dir_all(assets.join("game")).unwrap();
    std::fs::create_dir_all(assets.join("game_1")).unwrap();

    let options = CompilerOptions::default().with_target_url("db://assets/");
    let report = ProjectImporter::new(&project, &assets)
        .with_options(options)
        .run()
        .unwrap();

    assert_eq!(report.target_root, assets.join("game_2"));
    assert_eq!(report.compile.artifacts[0].url, "db://assets/game_2/eui_skins/ButtonSkin.prefab");
}

/// 测试缺少 resource 目录
#[test]
fn test_missing_resource_dir() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.path("empty")).unwrap();

    let result = ProjectImporter::new(fx.path("empty"), fx.path("assets")).run();
    assert!(matches!(result, Err(ImportError::MissingResourceDir(_))));
}
