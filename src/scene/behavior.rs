//! 节点行为
//!
//! Sprite / Label / Mask 属于渲染类行为，同一节点只能有一种。
//! 引用子孙节点时使用相对于宿主节点的名字路径（`a/b/thumb`）。

use crate::resource::ResourceHandle;
use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Behavior {
    Sprite(Sprite),
    Label(Label),
    ScrollBar(ScrollBar),
    ScrollView(ScrollView),
    Mask(Mask),
    ProgressBar(ProgressBar),
    EditBox(EditBox),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorKind {
    Sprite,
    Label,
    ScrollBar,
    ScrollView,
    Mask,
    ProgressBar,
    EditBox,
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BehaviorKind::Sprite => "Sprite",
            BehaviorKind::Label => "Label",
            BehaviorKind::ScrollBar => "ScrollBar",
            BehaviorKind::ScrollView => "ScrollView",
            BehaviorKind::Mask => "Mask",
            BehaviorKind::ProgressBar => "ProgressBar",
            BehaviorKind::EditBox => "EditBox",
        };
        f.write_str(name)
    }
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Sprite(_) => BehaviorKind::Sprite,
            Behavior::Label(_) => BehaviorKind::Label,
            Behavior::ScrollBar(_) => BehaviorKind::ScrollBar,
            Behavior::ScrollView(_) => BehaviorKind::ScrollView,
            Behavior::Mask(_) => BehaviorKind::Mask,
            Behavior::ProgressBar(_) => BehaviorKind::ProgressBar,
            Behavior::EditBox(_) => BehaviorKind::EditBox,
        }
    }
}

impl BehaviorKind {
    pub fn is_renderer(&self) -> bool {
        matches!(self, BehaviorKind::Sprite | BehaviorKind::Label | BehaviorKind::Mask)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeMode {
    /// 使用纹理原始尺寸
    #[default]
    Raw,
    /// 使用节点声明的尺寸
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpriteType {
    #[default]
    Simple,
    Sliced,
    Tiled,
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillDirection {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fill {
    pub direction: FillDirection,
    pub start: f32,
    pub range: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sprite {
    pub frame: Option<ResourceHandle>,
    pub size_mode: SizeMode,
    pub sprite_type: SpriteType,
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overflow {
    /// 按内容自动撑开
    #[default]
    None,
    /// 超出节点尺寸部分裁剪
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub overflow: Overflow,
    /// 位图字体
    pub font: Option<ResourceHandle>,
    pub bold: bool,
    pub italic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollBar {
    pub direction: ScrollDirection,
    /// 拖动手柄（thumb）
    pub handle: Option<String>,
    pub auto_hide: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollView {
    pub horizontal: bool,
    pub vertical: bool,
    pub inertia: bool,
    pub elastic: bool,
    pub content: Option<String>,
    pub horizontal_scroll_bar: Option<String>,
    pub vertical_scroll_bar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mask {
    pub inverted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressMode {
    #[default]
    Horizontal,
    Vertical,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressBar {
    pub mode: ProgressMode,
    pub bar: Option<String>,
    pub total_length: f32,
    /// 0..=1
    pub progress: f32,
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditBox {
    pub text: String,
    pub placeholder: String,
    pub font_size: f32,
    pub font_color: Color,
    pub placeholder_font_size: f32,
    pub placeholder_color: Color,
    pub background: Option<ResourceHandle>,
    /// -1 表示不限
    pub max_length: i32,
    pub password: bool,
}
