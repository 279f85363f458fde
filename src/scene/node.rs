//! 编译后的场景节点

use super::behavior::{Behavior, BehaviorKind, EditBox, Label, Sprite};
use crate::compiler::ArtifactHandle;
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// 锚点固定在左上角（y 轴向上的约定下为 (0, 1)）
pub const ANCHOR_TOP_LEFT: Point = Point::new(0.0, 1.0);

/// 对齐/拉伸约束
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraint {
    pub align_left: bool,
    pub align_right: bool,
    pub align_top: bool,
    pub align_bottom: bool,
    pub align_horizontal_center: bool,
    pub align_vertical_center: bool,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// 渲染类行为冲突：节点已有另一种渲染行为
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorConflict {
    pub existing: BehaviorKind,
    pub rejected: BehaviorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledNode {
    pub name: String,
    /// 解析出的组件类型名（Image、Label ...）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    pub size: Size,
    pub anchor: Point,
    pub position: Point,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// 0-255
    pub opacity: u8,
    pub active: bool,
    /// 百分比尺寸（0..1），仅在属性以 `%` 结尾时存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_percent: Option<f32>,
    /// 由皮肤实例化而来时指向皮肤产物
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<ArtifactHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
    #[serde(default)]
    pub behaviors: Vec<Behavior>,
    #[serde(default)]
    pub children: Vec<CompiledNode>,
}

impl CompiledNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widget: None,
            size: Size::ZERO,
            anchor: ANCHOR_TOP_LEFT,
            position: Point::default(),
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 255,
            active: true,
            width_percent: None,
            height_percent: None,
            skin: None,
            constraint: None,
            behaviors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: CompiledNode) {
        self.children.push(child);
    }

    pub fn is_skin_instance(&self) -> bool {
        self.skin.is_some()
    }

    /// 附加行为：同类行为直接替换；已有另一种渲染行为时拒绝
    pub fn attach_behavior(&mut self, behavior: Behavior) -> Result<(), BehaviorConflict> {
        let kind = behavior.kind();
        if let Some(slot) = self.behaviors.iter_mut().find(|b| b.kind() == kind) {
            *slot = behavior;
            return Ok(());
        }
        if kind.is_renderer() {
            if let Some(existing) = self
                .behaviors
                .iter()
                .map(Behavior::kind)
                .find(|k| k.is_renderer())
            {
                return Err(BehaviorConflict { existing, rejected: kind });
            }
        }
        self.behaviors.push(behavior);
        Ok(())
    }

    pub fn has_behavior(&self, kind: BehaviorKind) -> bool {
        self.behaviors.iter().any(|b| b.kind() == kind)
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::Sprite(s) => Some(s),
            _ => None,
        })
    }

    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        self.behaviors.iter_mut().find_map(|b| match b {
            Behavior::Sprite(s) => Some(s),
            _ => None,
        })
    }

    pub fn label(&self) -> Option<&Label> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn label_mut(&mut self) -> Option<&mut Label> {
        self.behaviors.iter_mut().find_map(|b| match b {
            Behavior::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn edit_box(&self) -> Option<&EditBox> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::EditBox(e) => Some(e),
            _ => None,
        })
    }

    /// 深度优先（文档顺序）查找第一个满足条件的子孙，返回下标路径
    pub fn find_descendant(&self, pred: &dyn Fn(&CompiledNode) -> bool) -> Option<Vec<usize>> {
        for (i, child) in self.children.iter().enumerate() {
            if pred(child) {
                return Some(vec![i]);
            }
            if let Some(mut sub) = child.find_descendant(pred) {
                sub.insert(0, i);
                return Some(sub);
            }
        }
        None
    }

    /// 按名字查找子孙
    pub fn find_named(&self, name: &str) -> Option<Vec<usize>> {
        self.find_descendant(&|n| n.name == name)
    }

    pub fn descendant_at(&self, path: &[usize]) -> Option<&CompiledNode> {
        path.iter().try_fold(self, |node, &i| node.children.get(i))
    }

    pub fn descendant_at_mut(&mut self, path: &[usize]) -> Option<&mut CompiledNode> {
        path.iter().try_fold(self, |node, &i| node.children.get_mut(i))
    }

    /// 下标路径转为名字路径，用于序列化引用
    pub fn name_path(&self, path: &[usize]) -> String {
        let mut names = Vec::with_capacity(path.len());
        let mut node = self;
        for &i in path {
            match node.children.get(i) {
                Some(child) => {
                    names.push(child.name.as_str());
                    node = child;
                }
                None => break,
            }
        }
        names.join("/")
    }

    /// 子孙节点总数（不含自身）
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }
}
