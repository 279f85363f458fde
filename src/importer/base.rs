//! 组件导入的基础定义

use crate::compiler::{Diagnostic, DiagnosticKind};
use crate::config::ResourceTable;
use crate::parser::{attrs, ExmlNode};
use crate::resource::{ResourceHandle, ResourceLocator};
use crate::scene::{Behavior, CompiledNode};
use crate::Color;
use std::path::Path;

/// 导入上下文
pub struct ImportContext<'a> {
    pub resources: &'a ResourceTable,
    pub locator: &'a mut dyn ResourceLocator,
    pub diagnostics: &'a mut Vec<Diagnostic>,
    /// 当前编译的源文件
    pub source: &'a Path,
    /// 正在编译皮肤文件本身的根节点（而不是使用处）
    pub is_skin_template: bool,
}

impl ImportContext<'_> {
    /// 解析符号资源名；未找到时静默返回 None（只记录诊断）
    pub fn resolve_resource(&mut self, name: &str) -> Option<ResourceHandle> {
        if name.is_empty() {
            return None;
        }

        let handle = if let Some(path) = self.resources.path(name) {
            self.locator.resolve(path, None)
        } else if let Some((sheet, frame)) = self.resources.sub_frame(name) {
            self.resources
                .path(sheet)
                .and_then(|path| self.locator.resolve(path, Some(frame)))
        } else if let Some((sheet, frame)) = name.rsplit_once('.') {
            // `sheet.frame` 写法
            self.resources
                .path(sheet)
                .and_then(|path| self.locator.resolve(path, Some(frame)))
        } else {
            None
        };

        if handle.is_none() {
            tracing::debug!("Unresolved resource '{}' in {}", name, self.source.display());
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnresolvedResource,
                self.source,
                format!("resource '{}' not found", name),
            ));
        }
        handle
    }

    /// 附加行为，渲染行为冲突时记录警告并放弃
    pub fn attach(&mut self, node: &mut CompiledNode, behavior: Behavior) {
        if let Err(conflict) = node.attach_behavior(behavior) {
            tracing::warn!(
                "Node '{}' in {} already has a {} renderer, cannot add {}",
                node.name,
                self.source.display(),
                conflict.existing,
                conflict.rejected
            );
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::BehaviorConflict,
                self.source,
                format!(
                    "node '{}' cannot add {} (has {})",
                    node.name, conflict.rejected, conflict.existing
                ),
            ));
        }
    }
}

/// 组件导入器：在结构构建完成后为节点补充组件语义
pub trait WidgetImporter {
    fn import(&self, node: &mut CompiledNode, element: &ExmlNode, ctx: &mut ImportContext);
}

/// 子元素过滤器：返回 false 表示丢弃该子元素
pub type ChildChecker = fn(&ExmlNode) -> bool;

/// 不接受任何标记子元素
pub fn no_child_checker(_child: &ExmlNode) -> bool {
    false
}

/// 元素是否显式声明了尺寸
pub fn has_declared_size(element: &ExmlNode) -> bool {
    !attrs::get_in_order(element, &["width", "minWidth", "maxWidth"], "").is_empty()
        || !attrs::get_in_order(element, &["height", "minHeight", "maxHeight"], "").is_empty()
}

/// 读取颜色属性（`0xRRGGBB`）
pub fn get_color(element: &ExmlNode, name: &str) -> Option<Color> {
    element.get_attr(name).and_then(Color::parse_literal)
}

/// 数字格式化：整数不带小数点
pub fn format_number(v: f32) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
