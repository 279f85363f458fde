//! Image 组件
//!
//! 属性：
//! - source: 资源名，可以是图集子帧（`sheet_json.frame` 或 sheet 的 subkey）
//! - scale9Grid: 九宫格中心区域 `x,y,w,h`
//! - fillMode: repeat / clip / scale（clip 退化为默认模式）

use super::base::*;
use crate::geometry::Rect;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode, SizeMode, SpriteType};

pub struct ImageImporter;

impl WidgetImporter for ImageImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let mut sprite = node.sprite().cloned().unwrap_or_default();

        let source = attrs::get(element, "source", "");
        if !source.is_empty() {
            sprite.frame = ctx.resolve_resource(source);
        }

        if has_declared_size(element) {
            sprite.size_mode = SizeMode::Custom;
        } else {
            sprite.size_mode = SizeMode::Raw;
            if let Some(size) = sprite.frame.as_ref().and_then(|h| ctx.locator.texture_size(h)) {
                node.size = size;
            }
        }

        let grid = element.get_attr("scale9Grid").and_then(Rect::parse_quad);
        if let Some(grid) = grid {
            sprite.sprite_type = SpriteType::Sliced;
            if let Some(handle) = &sprite.frame {
                if let Err(e) = ctx.locator.set_border(handle, grid) {
                    tracing::warn!("Failed to write 9-slice border for {}: {}", handle.path, e);
                }
            }
        } else if let Some(mode) = element.get_attr("fillMode") {
            sprite.sprite_type = match mode {
                "repeat" => SpriteType::Tiled,
                // clip 没有对应模式，按默认处理
                _ => SpriteType::Simple,
            };
        }

        ctx.attach(node, Behavior::Sprite(sprite));
    }
}
