//! 颜色模块

use serde::{Deserialize, Serialize};

/// RGBA 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// 解析 EXML 中的颜色字面量，如 `0xff8800`、`#ff8800`
    /// 也接受纯十进制数值（`textColor="16777215"`）
    pub fn parse_literal(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'));
        let value = match hex {
            Some(h) => u32::from_str_radix(h, 16).ok()?,
            None => s.parse::<u32>().ok()?,
        };
        Some(Self::from_hex(value))
    }

    // 预定义颜色
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
