//! 配置：编译选项、主题配置（皮肤表）、资源配置（资源表）

mod classify;
mod options;
mod resource;
mod theme;

pub use classify::JsonKind;
pub use options::{CompilerOptions, YAxisConvention};
pub use resource::{ResourceConfig, ResourceItem, ResourceTable};
pub use theme::{normalize_path, SkinTable, ThemeConfig};

use crate::error::{ImportError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// 读取并反序列化 JSON 文件
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| ImportError::json(path, e))
}
