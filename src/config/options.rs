//! 编译选项

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 纵向坐标换算约定
///
/// EXML 坐标原点在左上、y 向下；目标场景 y 向上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YAxisConvention {
    /// `y' = anchorOffsetY - y`
    #[default]
    AnchorOffset,
    /// `y' = parentHeight - y + anchorOffsetY`
    ParentFlip,
}

/// 一次编译运行的选项
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// EXML 源文件根目录，输出时保持相对目录结构
    #[serde(default)]
    pub source_root: PathBuf,
    /// 产物写入的根目录
    #[serde(default)]
    pub output_root: PathBuf,
    /// 产物在目标资源库中的 URL 前缀
    #[serde(default = "default_target_url")]
    pub target_url: String,
    #[serde(default)]
    pub y_axis: YAxisConvention,
}

fn default_target_url() -> String { "db://assets".to_string() }

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            source_root: PathBuf::new(),
            output_root: PathBuf::new(),
            target_url: default_target_url(),
            y_axis: YAxisConvention::default(),
        }
    }
}

impl CompilerOptions {
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        super::read_json(path)
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }

    pub fn with_y_axis(mut self, y_axis: YAxisConvention) -> Self {
        self.y_axis = y_axis;
        self
    }
}
