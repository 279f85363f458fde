//! HScrollBar / VScrollBar 组件
//!
//! 皮肤中名为 `thumb` 的子孙节点作为拖动手柄。
//! 属性：
//! - autoVisibility: 不滚动时自动隐藏，默认 true

use super::base::*;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode, ScrollBar, ScrollDirection, SizeMode};

pub struct ScrollBarImporter {
    pub direction: ScrollDirection,
}

impl ScrollBarImporter {
    pub const fn horizontal() -> Self {
        Self { direction: ScrollDirection::Horizontal }
    }

    pub const fn vertical() -> Self {
        Self { direction: ScrollDirection::Vertical }
    }
}

impl WidgetImporter for ScrollBarImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let thumb = node.find_named("thumb");

        // 手柄随滚动内容缩放，改用自定义尺寸
        if let Some(sprite) = thumb
            .as_deref()
            .and_then(|p| node.descendant_at_mut(p))
            .and_then(CompiledNode::sprite_mut)
        {
            sprite.size_mode = SizeMode::Custom;
        }

        let bar = ScrollBar {
            direction: self.direction,
            handle: thumb.map(|p| node.name_path(&p)),
            auto_hide: attrs::get_bool(element, "autoVisibility", true),
        };
        ctx.attach(node, Behavior::ScrollBar(bar));
    }
}
