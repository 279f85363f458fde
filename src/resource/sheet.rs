//! 图集描述（Egret sheet JSON）

use crate::geometry::Size;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpriteSheet {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub frames: HashMap<String, SheetFrame>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SheetFrame {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub w: f32,
    #[serde(default)]
    pub h: f32,
    #[serde(default)]
    pub off_x: f32,
    #[serde(default)]
    pub off_y: f32,
    #[serde(default)]
    pub source_w: Option<f32>,
    #[serde(default)]
    pub source_h: Option<f32>,
}

impl SheetFrame {
    /// 子帧原始尺寸（裁剪前）
    pub fn source_size(&self) -> Size {
        Size::new(self.source_w.unwrap_or(self.w), self.source_h.unwrap_or(self.h))
    }
}

impl SpriteSheet {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn frame(&self, name: &str) -> Option<&SheetFrame> {
        self.frames.get(name)
    }
}
