//! 位图字体描述
//!
//! 支持两种格式：经典 BMFont 文本格式和 Egret 的 JSON 字体。

use super::FontMetrics;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EgretFont {
    #[serde(default)]
    file: String,
    #[serde(default)]
    frames: BTreeMap<String, EgretGlyph>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct EgretGlyph {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
    #[serde(default)]
    w: i32,
    #[serde(default)]
    h: i32,
    #[serde(default)]
    off_x: i32,
    #[serde(default)]
    off_y: i32,
}

/// 单个字形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    pub face: String,
    pub size: i32,
    pub line_height: i32,
    pub file: String,
    pub glyphs: Vec<Glyph>,
}

impl BitmapFont {
    /// 解析 Egret JSON 字体；字号取最大帧宽，行高取最大帧高
    pub fn from_egret_json(text: &str, face: &str) -> serde_json::Result<Self> {
        let src: EgretFont = serde_json::from_str(text)?;
        let mut size = 0;
        let mut line_height = 0;
        let mut glyphs = Vec::with_capacity(src.frames.len());

        for (key, g) in &src.frames {
            let Some(ch) = key.chars().next() else { continue };
            size = size.max(g.w);
            line_height = line_height.max(g.h);
            glyphs.push(Glyph {
                id: ch as u32,
                x: g.x,
                y: g.y,
                width: g.w,
                height: g.h,
                x_offset: g.off_x,
                y_offset: g.off_y,
            });
        }

        Ok(Self {
            face: face.to_string(),
            size,
            line_height,
            file: src.file,
            glyphs,
        })
    }

    /// 输出经典 BMFont 文本格式
    pub fn to_classic(&self) -> String {
        let mut lines = Vec::with_capacity(self.glyphs.len() + 4);
        lines.push(format!(
            "info face=\"{}\" size={} bold=0 italic=0 charset=\"\" unicode=0 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1",
            self.face, self.size
        ));
        lines.push(format!(
            "common lineHeight={} base=0 scaleW=0 scaleH=0 pages=1 packed=0",
            self.line_height
        ));
        lines.push(format!("page id=0 file=\"{}\"", self.file));
        lines.push(format!("chars count={}", self.glyphs.len()));
        for g in &self.glyphs {
            lines.push(format!(
                "char id={} x={} y={} width={} height={} xoffset={} yoffset={} xadvance=0 page=0 chnl=0",
                g.id, g.x, g.y, g.width, g.height, g.x_offset, g.y_offset
            ));
        }
        lines.join("\n")
    }

    /// 从经典文本格式中读取字号和行高
    pub fn parse_classic_metrics(text: &str) -> Option<FontMetrics> {
        let mut size = None;
        let mut line_height = None;
        for line in text.lines() {
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("info") => size = find_value(parts, "size"),
                Some("common") => line_height = find_value(parts, "lineHeight"),
                _ => {}
            }
        }
        let font_size = size?;
        Some(FontMetrics {
            font_size,
            line_height: line_height.unwrap_or(font_size),
        })
    }

    pub fn metrics(&self) -> FontMetrics {
        FontMetrics {
            font_size: self.size as f32,
            line_height: self.line_height as f32,
        }
    }
}

fn find_value<'a>(mut parts: impl Iterator<Item = &'a str>, key: &str) -> Option<f32> {
    parts.find_map(|p| {
        let (k, v) = p.split_once('=')?;
        if k == key { v.trim_matches('"').parse::<f32>().ok() } else { None }
    })
}
