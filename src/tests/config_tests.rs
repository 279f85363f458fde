//! 配置测试：JSON 分类、主题配置、资源配置、编译选项

use super::support::*;
use crate::config::*;
use serde_json::json;
use std::path::Path;

/// 测试按结构识别配置文件
#[test]
fn test_classify_json() {
    let res = json!({ "groups": [], "resources": [{ "name": "a", "type": "image", "url": "a.png" }] });
    let thm = json!({ "skins": { "eui.Button": "resource/ButtonSkin.exml" }, "exmls": [] });
    let anim = json!({ "mc": { "run": {} }, "res": { "f1": {} } });

    assert_eq!(JsonKind::classify(&res), Some(JsonKind::ResourceConfig));
    assert_eq!(JsonKind::classify(&thm), Some(JsonKind::ThemeConfig));
    assert_eq!(JsonKind::classify(&anim), Some(JsonKind::AnimationConfig));
    assert_eq!(JsonKind::classify(&json!({ "skins": {}, "exmls": {} })), None);
    assert_eq!(JsonKind::classify(&json!({ "mc": {}, "res": null })), None);
    assert_eq!(JsonKind::classify(&json!([1, 2])), None);
    assert!(JsonKind::classify_str("not json").is_none());
}

/// 测试资源配置展开为资源表，sheet 的 subkeys 映射到子帧
#[test]
fn test_resource_table_from_config() {
    let config: ResourceConfig = serde_json::from_value(json!({
        "groups": [{ "name": "preload", "keys": "bg_png,icons_json" }],
        "resources": [
            { "name": "bg_png", "type": "image", "url": "assets/bg.png" },
            { "name": "icons_json", "type": "sheet", "url": "assets/icons.json", "subkeys": "star, heart" },
            { "name": "empty", "type": "image", "url": "" }
        ]
    }))
    .unwrap();

    let mut table = ResourceTable::new();
    table.extend_from_config(&config);

    assert_eq!(table.path("bg_png"), Some("assets/bg.png"));
    assert_eq!(table.path("empty"), None);
    assert_eq!(table.sub_frame("heart"), Some(("icons_json", "heart")));
    assert_eq!(table.sub_frame("star"), Some(("icons_json", "star")));
    assert_eq!(table.sub_frame("bg_png"), None);
    assert_eq!(table.len(), 2);
}

/// 测试主题配置展开为皮肤表，支持反查
#[test]
fn test_skin_table_from_theme() {
    let theme: ThemeConfig = serde_json::from_value(json!({
        "skins": {
            "eui.Button": "resource/eui_skins/ButtonSkin.exml",
            "eui.ToggleButton": "resource/eui_skins/ButtonSkin.exml",
            "eui.Label": "resource/eui_skins/LabelSkin.exml"
        },
        "exmls": ["resource/eui_skins/ButtonSkin.exml"]
    }))
    .unwrap();

    let root = Path::new("/proj");
    let mut skins = SkinTable::new();
    skins.extend_from_theme(&theme, root);

    let button = root.join("resource/eui_skins/ButtonSkin.exml");
    assert_eq!(skins.get("eui.Button"), Some(button.as_path()));
    assert_eq!(skins.key_for_path(&root.join("resource/eui_skins/LabelSkin.exml")), Some("eui.Label"));
    assert_eq!(skins.key_for_path(Path::new("/elsewhere.exml")), None);
    assert_eq!(skins.len(), 3);
    assert_eq!(skins.paths().len(), 2);
}

/// 测试主题中带 `.`、`..` 的路径按字面规整后再比较
#[test]
fn test_skin_table_normalizes_paths() {
    let theme: ThemeConfig = serde_json::from_value(json!({
        "skins": {
            "eui.Button": "./resource/eui_skins/ButtonSkin.exml",
            "eui.Label": "resource/tmp/../eui_skins/LabelSkin.exml"
        },
        "exmls": []
    }))
    .unwrap();

    let root = Path::new("/proj");
    let mut skins = SkinTable::new();
    skins.extend_from_theme(&theme, root);

    let button = root.join("resource/eui_skins/ButtonSkin.exml");
    assert_eq!(skins.get("eui.Button"), Some(button.as_path()));
    assert_eq!(skins.key_for_path(&button), Some("eui.Button"));
    assert_eq!(skins.key_for_path(Path::new("/proj/./resource/eui_skins/LabelSkin.exml")), Some("eui.Label"));

    assert_eq!(normalize_path(Path::new("a/./b/../c")), Path::new("a/c"));
    assert_eq!(normalize_path(Path::new("/../x")), Path::new("/x"));
    assert_eq!(normalize_path(Path::new("../x")), Path::new("../x"));
}

/// 测试编译选项默认值与 JSON 读取
#[test]
fn test_compiler_options() {
    let defaults = CompilerOptions::default();
    assert_eq!(defaults.target_url, "db://assets");
    assert_eq!(defaults.y_axis, YAxisConvention::AnchorOffset);

    let fx = Fixture::new();
    let path = fx.write(
        "options.json",
        r#"{ "sourceRoot": "src", "outputRoot": "out", "yAxis": "parentFlip" }"#,
    );
    let options = CompilerOptions::from_json_file(&path).unwrap();

    assert_eq!(options.source_root, Path::new("src"));
    assert_eq!(options.output_root, Path::new("out"));
    assert_eq!(options.target_url, "db://assets");
    assert_eq!(options.y_axis, YAxisConvention::ParentFlip);

    let bad = fx.write("bad.json", "{ oops");
    assert!(matches!(
        CompilerOptions::from_json_file(&bad),
        Err(crate::ImportError::Json { .. })
    ));
    assert!(matches!(
        CompilerOptions::from_json_file(&fx.path("missing.json")),
        Err(crate::ImportError::Io { .. })
    ));
}
