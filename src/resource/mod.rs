//! 资源定位：符号资源名 -> 目标资源库中的句柄

pub mod font;
mod fs;
pub mod sheet;

pub use font::BitmapFont;
pub use fs::FsResourceLocator;
pub use sheet::SpriteSheet;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// 已解析的资源句柄
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceHandle {
    /// 相对于目标资源根目录的路径
    pub path: String,
    /// 图集中的子帧名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

impl ResourceHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), frame: None }
    }

    pub fn with_frame(path: impl Into<String>, frame: impl Into<String>) -> Self {
        Self { path: path.into(), frame: Some(frame.into()) }
    }
}

/// 位图字体度量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub font_size: f32,
    pub line_height: f32,
}

/// 资源定位器（外部协作者边界）
pub trait ResourceLocator {
    /// 解析路径；`sub_frame` 为图集子帧名
    fn resolve(&mut self, path: &str, sub_frame: Option<&str>) -> Option<ResourceHandle>;

    /// 纹理（或子帧）的原始尺寸
    fn texture_size(&mut self, _handle: &ResourceHandle) -> Option<Size> {
        None
    }

    /// 改写资源的九宫格边框元数据，尽力而为
    fn set_border(&mut self, handle: &ResourceHandle, grid: Rect) -> Result<()>;

    /// 读取位图字体描述
    fn load_bitmap_font(&mut self, handle: &ResourceHandle) -> Result<FontMetrics>;
}
