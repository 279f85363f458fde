//! ProgressBar 组件
//!
//! 属性：
//! - value: 当前值，默认 0
//! - maximum: 最大值，默认 100
//! - direction: ltr / rtl / ttb / btt，rtl 与 ttb 反向填充
//!
//! 皮肤中的 `thumb` 作为填充精灵，`labelDisplay` 显示 "value / maximum"。

use super::base::*;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{
    Behavior, CompiledNode, Fill, FillDirection, ProgressBar, ProgressMode, SpriteType,
};

pub struct ProgressBarImporter;

impl WidgetImporter for ProgressBarImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let direction = attrs::get(element, "direction", "ltr");
        let reverse = matches!(direction, "rtl" | "ttb");
        let vertical = matches!(direction, "ttb" | "btt");

        let value = attrs::get_float(element, "value", 0.0);
        let maximum = attrs::get_float(element, "maximum", 100.0);
        let progress = if maximum > 0.0 {
            (value.round() / maximum).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut total_length = if vertical { node.size.height } else { node.size.width };

        let thumb = node.find_named("thumb");
        if let Some(t) = thumb.as_deref().and_then(|p| node.descendant_at_mut(p)) {
            total_length = if vertical { t.size.height } else { t.size.width };
            if let Some(sprite) = t.sprite_mut() {
                sprite.sprite_type = SpriteType::Filled;
                // 反向时从末端开始，范围取负
                sprite.fill = Some(Fill {
                    direction: if vertical { FillDirection::Vertical } else { FillDirection::Horizontal },
                    start: if reverse { 1.0 } else { 0.0 },
                    range: if reverse { -progress } else { progress },
                });
            }
        }

        if let Some(label) = node
            .find_named("labelDisplay")
            .and_then(|p| node.descendant_at_mut(&p))
            .and_then(CompiledNode::label_mut)
        {
            label.text = format!("{} / {}", format_number(value), format_number(maximum));
        }

        let bar = ProgressBar {
            mode: ProgressMode::Filled,
            bar: thumb.map(|p| node.name_path(&p)),
            total_length,
            progress,
            reverse,
        };
        ctx.attach(node, Behavior::ProgressBar(bar));
    }
}
