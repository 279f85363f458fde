//! BitmapLabel 组件
//!
//! 与 Label 相同，字号和行高取自 `font` 指向的位图字体描述。
//! 字体读取失败时保留默认度量。

use super::base::*;
use super::label::build_label;
use crate::parser::{attrs, ExmlNode};
use crate::scene::{Behavior, CompiledNode};

pub struct BitmapLabelImporter;

impl WidgetImporter for BitmapLabelImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext) {
        let mut label = build_label(node, element);

        let font = attrs::get(element, "font", "");
        if let Some(handle) = ctx.resolve_resource(font) {
            match ctx.locator.load_bitmap_font(&handle) {
                Ok(metrics) => {
                    label.font_size = metrics.font_size;
                    label.line_height = metrics.line_height;
                }
                Err(e) => tracing::debug!("Bitmap font {} ignored: {}", handle.path, e),
            }
            label.font = Some(handle);
        }

        ctx.attach(node, Behavior::Label(label));
    }
}
