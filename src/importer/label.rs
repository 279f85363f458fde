//! Label / EditableText 组件
//!
//! 属性：
//! - text: 文本
//! - textAlign: left / center / right
//! - verticalAlign: top / middle / bottom / justify（按 top 处理）
//! - size: 字号，默认 30
//! - textColor: `0xRRGGBB`，默认白色
//! - lineSpacing: 行间距
//! - bold / italic

use super::base::*;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode, HorizontalAlign, Label, Overflow, VerticalAlign};
use crate::Color;

pub const DEFAULT_FONT_SIZE: f32 = 30.0;

pub struct LabelImporter;

impl WidgetImporter for LabelImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let label = build_label(node, element);
        ctx.attach(node, Behavior::Label(label));
    }
}

/// 从元素属性构建文本行为；节点已有文本行为（来自皮肤）时在其基础上覆盖
pub fn build_label(node: &CompiledNode, element: &ExmlNode) -> Label {
    let mut label = node.label().cloned().unwrap_or_else(|| Label {
        font_size: DEFAULT_FONT_SIZE,
        line_height: DEFAULT_FONT_SIZE,
        color: Color::WHITE,
        ..Default::default()
    });

    if let Some(text) = element.get_attr("text") {
        label.text = text.to_string();
    }

    if let Some(align) = element.get_attr("textAlign") {
        label.horizontal_align = match align {
            "center" => HorizontalAlign::Center,
            "right" => HorizontalAlign::Right,
            _ => HorizontalAlign::Left,
        };
    }

    if let Some(align) = element.get_attr("verticalAlign") {
        label.vertical_align = match align {
            "middle" => VerticalAlign::Center,
            "bottom" => VerticalAlign::Bottom,
            // justify 没有对应的纵向模式
            _ => VerticalAlign::Top,
        };
    }

    if attrs::has(element, "size") {
        label.font_size = attrs::get_float(element, "size", DEFAULT_FONT_SIZE);
        label.line_height = label.font_size;
    }
    if attrs::has(element, "lineSpacing") {
        label.line_height = label.font_size + attrs::get_float(element, "lineSpacing", 0.0);
    }

    if let Some(color) = get_color(element, "textColor") {
        label.color = color;
    }

    label.bold = attrs::get_bool(element, "bold", label.bold);
    label.italic = attrs::get_bool(element, "italic", label.italic);

    label.overflow = if has_declared_size(element) {
        Overflow::Clamp
    } else {
        Overflow::None
    };

    label
}
