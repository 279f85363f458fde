//! TextInput 组件
//!
//! 从皮肤的 `promptDisplay`、`textDisplay`、`Image` 子孙节点提取样式。
//! 编译皮肤文件本身时只隐藏这些子节点以保留模板；使用处提取后直接移除。
//! 属性：
//! - prompt: 占位文本
//! - text: 初始文本
//! - maxChars: 最大长度
//! - displayAsPassword: 密码模式

use super::base::*;
use super::label::DEFAULT_FONT_SIZE;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode, EditBox};
use crate::Color;

const PLACEHOLDER_COLOR: Color = Color::from_hex(0xBBBBBB);

pub struct TextInputImporter;

impl WidgetImporter for TextInputImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let mut edit = node.edit_box().cloned().unwrap_or_else(|| EditBox {
            font_size: DEFAULT_FONT_SIZE,
            font_color: Color::WHITE,
            placeholder_font_size: DEFAULT_FONT_SIZE,
            placeholder_color: PLACEHOLDER_COLOR,
            max_length: -1,
            ..Default::default()
        });

        if let Some(prompt) = node
            .find_named("promptDisplay")
            .and_then(|p| node.descendant_at(&p))
            .and_then(CompiledNode::label)
        {
            edit.placeholder_color = prompt.color;
            edit.placeholder_font_size = prompt.font_size;
            if edit.placeholder.is_empty() {
                edit.placeholder = prompt.text.clone();
            }
        }

        if let Some(text) = node
            .find_named("textDisplay")
            .and_then(|p| node.descendant_at(&p))
            .and_then(CompiledNode::label)
        {
            edit.font_color = text.color;
            edit.font_size = text.font_size;
        }

        if let Some(frame) = node
            .find_named("Image")
            .and_then(|p| node.descendant_at(&p))
            .and_then(CompiledNode::sprite)
            .and_then(|s| s.frame.clone())
        {
            edit.background = Some(frame);
        }

        if let Some(prompt) = element.get_attr("prompt") {
            edit.placeholder = prompt.to_string();
        }
        if let Some(text) = element.get_attr("text") {
            edit.text = text.to_string();
        }
        edit.max_length = attrs::get_int(element, "maxChars", edit.max_length);
        edit.password = attrs::get_bool(element, "displayAsPassword", edit.password);

        if ctx.is_skin_template {
            for child in &mut node.children {
                child.active = false;
            }
        } else {
            node.children.clear();
        }

        ctx.attach(node, Behavior::EditBox(edit));
    }
}
