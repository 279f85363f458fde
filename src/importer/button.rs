//! Button 组件：外观完全来自皮肤，这里不需要额外处理

use super::base::*;
use crate::parser::ExmlNode;
use crate::scene::CompiledNode;

pub struct ButtonImporter;

impl WidgetImporter for ButtonImporter {
    fn import(&self, _node: &mut CompiledNode, _element: &ExmlNode, _ctx: &mut ImportContext) {}
}
