//! 几何图形模块

use serde::{Deserialize, Serialize};

/// 2D 点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 尺寸
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// 矩形
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// 解析 `x,y,w,h` 形式的矩形（如 scale9Grid）
    pub fn parse_quad(s: &str) -> Option<Rect> {
        let nums: Vec<f32> = s
            .split(',')
            .map(|n| n.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .ok()?;
        match nums.as_slice() {
            [x, y, w, h] => Some(Rect::new(*x, *y, *w, *h)),
            _ => None,
        }
    }

    /// 以该矩形为九宫格中心区域，求相对于纹理尺寸的四边内距
    pub fn insets_within(&self, texture: Size) -> Insets {
        Insets {
            top: self.y.max(0.0),
            bottom: (texture.height - self.bottom()).max(0.0),
            left: self.x.max(0.0),
            right: (texture.width - self.right()).max(0.0),
        }
    }
}

/// 四边内距（九宫格边框）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}
