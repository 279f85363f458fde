//! 资源配置（*.res.json）与资源表

use serde::Deserialize;
use std::collections::HashMap;

/// 资源配置文件结构
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig {
    #[serde(default)]
    pub groups: Vec<serde_json::Value>,
    #[serde(default)]
    pub resources: Vec<ResourceItem>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    /// sheet 资源的子帧名，逗号分隔
    #[serde(default)]
    pub subkeys: String,
}

/// 资源名 -> 相对路径，一次运行内不可变
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceTable {
    paths: HashMap<String, String>,
    /// 子帧名 -> (所属 sheet 资源名, 帧名)
    sub_frames: HashMap<String, (String, String)>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(name.into(), path.into());
    }

    pub fn insert_sub_frame(&mut self, key: impl Into<String>, sheet: impl Into<String>, frame: impl Into<String>) {
        self.sub_frames.insert(key.into(), (sheet.into(), frame.into()));
    }

    pub fn extend_from_config(&mut self, config: &ResourceConfig) {
        for item in &config.resources {
            if item.name.is_empty() || item.url.is_empty() {
                continue;
            }
            self.insert(item.name.clone(), item.url.clone());
            if item.kind == "sheet" {
                for key in item.subkeys.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                    self.insert_sub_frame(key, item.name.clone(), key);
                }
            }
        }
    }

    /// 资源名对应的相对路径（空路径视为不存在）
    pub fn path(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str).filter(|p| !p.is_empty())
    }

    pub fn sub_frame(&self, key: &str) -> Option<(&str, &str)> {
        self.sub_frames.get(key).map(|(s, f)| (s.as_str(), f.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
