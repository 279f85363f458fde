//! 组件导入器
//! 每个组件独立文件，注册表按组件类型名（`Image`、`Scroller` ...）分发

mod base;
mod image;
mod label;
mod bitmap_label;
mod button;
mod scroll_bar;
mod scroller;
mod progress_bar;
mod text_input;

pub use base::*;
pub use image::ImageImporter;
pub use label::{build_label, LabelImporter, DEFAULT_FONT_SIZE};
pub use bitmap_label::BitmapLabelImporter;
pub use button::ButtonImporter;
pub use scroll_bar::ScrollBarImporter;
pub use scroller::ScrollerImporter;
pub use progress_bar::ProgressBarImporter;
pub use text_input::TextInputImporter;

use crate::parser::ExmlNode;
use crate::scene::CompiledNode;
use std::collections::HashMap;

/// 组件注册表
pub struct WidgetRegistry {
    importers: HashMap<String, Box<dyn WidgetImporter>>,
    checkers: HashMap<String, ChildChecker>,
}

impl WidgetRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self {
            importers: HashMap::new(),
            checkers: HashMap::new(),
        }
    }

    /// 注册内置组件
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Image", ImageImporter);
        registry.register("Label", LabelImporter);
        registry.register("EditableText", LabelImporter);
        registry.register("BitmapLabel", BitmapLabelImporter);
        registry.register("HScrollBar", ScrollBarImporter::horizontal());
        registry.register("VScrollBar", ScrollBarImporter::vertical());
        registry.register("Scroller", ScrollerImporter);
        registry.register("ProgressBar", ProgressBarImporter);
        registry.register("TextInput", TextInputImporter);
        registry.register("Button", ButtonImporter);

        for widget in ["Image", "Label", "EditableText", "BitmapLabel", "Button"] {
            registry.register_child_checker(widget, no_child_checker);
        }
        registry
    }

    pub fn register(&mut self, widget: &str, importer: impl WidgetImporter + 'static) {
        self.importers.insert(widget.to_string(), Box::new(importer));
    }

    pub fn register_child_checker(&mut self, widget: &str, checker: ChildChecker) {
        self.checkers.insert(widget.to_string(), checker);
    }

    pub fn has_importer(&self, widget: &str) -> bool {
        self.importers.contains_key(widget)
    }

    /// 该组件是否接受某个标记子元素；未注册过滤器时全部接受
    pub fn accepts_child(&self, widget: &str, child: &ExmlNode) -> bool {
        self.checkers.get(widget).map_or(true, |check| check(child))
    }

    /// 调用组件导入器，未注册的组件类型不做任何处理，返回 false
    pub fn import(
        &self,
        widget: &str,
        node: &mut CompiledNode,
        element: &ExmlNode,
        ctx: &mut ImportContext,
    ) -> bool {
        match self.importers.get(widget) {
            Some(importer) => {
                importer.import(node, element, ctx);
                true
            }
            None => false,
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
