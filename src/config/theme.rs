//! 主题配置（*.thm.json）与皮肤表

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// 主题配置文件结构
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// 皮肤键 -> EXML 路径（相对工程根目录）
    #[serde(default)]
    pub skins: BTreeMap<String, String>,
    #[serde(default)]
    pub exmls: Vec<String>,
}

/// 皮肤键 -> EXML 源文件路径，一次运行内不可变
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinTable {
    skins: BTreeMap<String, PathBuf>,
}

impl SkinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl AsRef<Path>) {
        self.skins.insert(key.into(), normalize_path(path.as_ref()));
    }

    /// 合并主题配置，路径以工程根目录为基准
    pub fn extend_from_theme(&mut self, theme: &ThemeConfig, project_root: &Path) {
        for (key, path) in &theme.skins {
            self.insert(key.clone(), project_root.join(path));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.skins.get(key).map(PathBuf::as_path)
    }

    /// 反查：某个文件自身注册为哪个皮肤键
    pub fn key_for_path(&self, path: &Path) -> Option<&str> {
        let path = normalize_path(path);
        self.skins
            .iter()
            .find(|(_, p)| **p == path)
            .map(|(k, _)| k.as_str())
    }

    /// 所有皮肤文件（去重，按键顺序）
    pub fn paths(&self) -> Vec<&Path> {
        let mut out: Vec<&Path> = Vec::new();
        for p in self.skins.values() {
            if !out.contains(&p.as_path()) {
                out.push(p);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

/// 按字面规整路径：去掉 `.`，`..` 抵消前一个普通段，不访问文件系统
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(part),
            },
            other => out.push(other),
        }
    }
    out
}
