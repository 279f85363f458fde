//! Scroller 组件
//!
//! 属性：
//! - scrollPolicyH / scrollPolicyV: on / off / auto，off 关闭该方向
//! - throwSpeed: 大于 0 时开启惯性
//! - bounces: 回弹，默认 true
//!
//! 视口为名为 `viewport` 的子孙节点，或第一个容器类型的子孙节点。

use super::base::*;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode, Mask, ScrollView};

/// 可作为滚动视口的容器类型
const CONTAINER_TYPES: [&str; 5] = ["Group", "DataGroup", "List", "TabBar", "ViewStack"];

pub struct ScrollerImporter;

impl WidgetImporter for ScrollerImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let horizontal = attrs::get(element, "scrollPolicyH", "auto") != "off";
        let vertical = attrs::get(element, "scrollPolicyV", "auto") != "off";

        let h_bar = node
            .find_named("horizontalScrollBar")
            .filter(|_| horizontal)
            .map(|p| node.name_path(&p));
        let v_bar = node
            .find_named("verticalScrollBar")
            .filter(|_| vertical)
            .map(|p| node.name_path(&p));

        let viewport = node.find_named("viewport").or_else(|| {
            node.find_descendant(&|n| {
                n.widget
                    .as_deref()
                    .is_some_and(|w| CONTAINER_TYPES.contains(&w))
            })
        });

        let size = node.size;
        if let Some(vp) = viewport.as_deref().and_then(|p| node.descendant_at_mut(p)) {
            if vp.size.width == 0.0 {
                vp.size.width = size.width;
            }
            if vp.size.height == 0.0 {
                vp.size.height = size.height;
            }
        }

        let view = ScrollView {
            horizontal,
            vertical,
            inertia: attrs::get_float(element, "throwSpeed", 0.0) > 0.0,
            elastic: attrs::get_bool(element, "bounces", true),
            content: viewport.map(|p| node.name_path(&p)),
            horizontal_scroll_bar: h_bar,
            vertical_scroll_bar: v_bar,
        };

        ctx.attach(node, Behavior::ScrollView(view));
        ctx.attach(node, Behavior::Mask(Mask::default()));
    }
}
