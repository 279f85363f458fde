//! 锚点布局
//!
//! 每个节点只依赖自身属性和父节点已算好的尺寸，父节点先于子节点完成布局。

use crate::config::YAxisConvention;
use crate::geometry::{Point, Size};
use crate::parser::attrs;
use crate::parser::ExmlNode;
use crate::scene::{CompiledNode, Constraint, ANCHOR_TOP_LEFT};

const WIDTH_ATTRS: [&str; 3] = ["width", "minWidth", "maxWidth"];
const HEIGHT_ATTRS: [&str; 3] = ["height", "minHeight", "maxHeight"];

/// 尺寸值：绝对值或父节点尺寸的百分比
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Points(f32),
    /// 0..1 的比例
    Percent(f32),
}

impl Length {
    /// `"50%"` -> Percent(0.5)，`"50"` -> Points(50)
    pub fn parse(s: &str) -> Option<Length> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let value = attrs::parse_leading_float(s)?;
        if s.ends_with('%') {
            Some(Length::Percent(value / 100.0))
        } else {
            Some(Length::Points(value))
        }
    }

    pub fn resolve(&self, parent: f32) -> f32 {
        match self {
            Length::Points(v) => *v,
            Length::Percent(f) => f * parent,
        }
    }

    pub fn percent(&self) -> Option<f32> {
        match self {
            Length::Percent(f) => Some(*f),
            Length::Points(_) => None,
        }
    }
}

/// 从元素属性中读取的布局参数
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutAttrs {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub x: f32,
    pub y: f32,
    pub anchor_offset_x: f32,
    pub anchor_offset_y: f32,
    pub alpha: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
    pub visible: bool,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub horizontal_center: Option<f32>,
    pub vertical_center: Option<f32>,
}

impl LayoutAttrs {
    pub fn from_element(el: &ExmlNode) -> Self {
        let opt = |name: &str| -> Option<f32> {
            el.get_attr(name).and_then(attrs::parse_leading_float)
        };
        Self {
            width: Length::parse(attrs::get_in_order(el, &WIDTH_ATTRS, "")),
            height: Length::parse(attrs::get_in_order(el, &HEIGHT_ATTRS, "")),
            x: attrs::get_float(el, "x", 0.0),
            y: attrs::get_float(el, "y", 0.0),
            anchor_offset_x: attrs::get_float(el, "anchorOffsetX", 0.0),
            anchor_offset_y: attrs::get_float(el, "anchorOffsetY", 0.0),
            alpha: attrs::get_float(el, "alpha", 1.0),
            scale_x: attrs::get_float(el, "scaleX", 1.0),
            scale_y: attrs::get_float(el, "scaleY", 1.0),
            rotation: attrs::get_float(el, "rotation", 0.0),
            visible: attrs::get_bool(el, "visible", true),
            left: opt("left"),
            right: opt("right"),
            top: opt("top"),
            bottom: opt("bottom"),
            horizontal_center: opt("horizontalCenter"),
            vertical_center: opt("verticalCenter"),
        }
    }

    fn has_edge_attrs(&self) -> bool {
        self.left.is_some()
            || self.right.is_some()
            || self.top.is_some()
            || self.bottom.is_some()
            || self.horizontal_center.is_some()
            || self.vertical_center.is_some()
    }
}

/// 布局引擎
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    y_axis: YAxisConvention,
}

impl LayoutEngine {
    pub fn new(y_axis: YAxisConvention) -> Self {
        Self { y_axis }
    }

    /// 对单个节点应用布局；`parent_size` 为 None 表示根节点
    pub fn apply(&self, node: &mut CompiledNode, element: &ExmlNode, parent_size: Option<Size>) {
        let attrs = LayoutAttrs::from_element(element);
        self.apply_attrs(node, &attrs, parent_size);
    }

    pub fn apply_attrs(&self, node: &mut CompiledNode, attrs: &LayoutAttrs, parent_size: Option<Size>) {
        let parent = parent_size.unwrap_or(Size::ZERO);
        let from_skin = node.is_skin_instance();

        // 尺寸：未声明时皮肤实例沿用皮肤自身尺寸，否则为 0
        let inherited = node.size;
        let width = match attrs.width {
            Some(len) => len.resolve(parent.width),
            None if from_skin => inherited.width,
            None => 0.0,
        };
        let height = match attrs.height {
            Some(len) => len.resolve(parent.height),
            None if from_skin => inherited.height,
            None => 0.0,
        };
        node.size = Size::new(width, height);
        node.width_percent = attrs.width.and_then(|l| l.percent());
        node.height_percent = attrs.height.and_then(|l| l.percent());

        node.anchor = ANCHOR_TOP_LEFT;
        let y = match self.y_axis {
            YAxisConvention::AnchorOffset => attrs.anchor_offset_y - attrs.y,
            YAxisConvention::ParentFlip => parent.height - attrs.y + attrs.anchor_offset_y,
        };
        node.position = Point::new(attrs.x - attrs.anchor_offset_x, y);

        node.opacity = (attrs.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        node.scale_x = attrs.scale_x;
        node.scale_y = attrs.scale_y;
        node.rotation = attrs.rotation;
        node.active = attrs.visible;

        node.constraint = synthesize_constraint(attrs, parent_size);
    }
}

/// 生成对齐约束；百分比尺寸优先于居中/边距组合
fn synthesize_constraint(attrs: &LayoutAttrs, parent: Option<Size>) -> Option<Constraint> {
    let width_pct = attrs.width.and_then(|l| l.percent());
    let height_pct = attrs.height.and_then(|l| l.percent());
    if !attrs.has_edge_attrs() && width_pct.is_none() && height_pct.is_none() {
        return None;
    }

    let mut c = Constraint::default();

    let h = resolve_axis(
        width_pct,
        parent.map(|p| p.width),
        attrs.left,
        attrs.right,
        attrs.horizontal_center,
    );
    c.align_left = h.align_start;
    c.align_right = h.align_end;
    c.left = h.start;
    c.right = h.end;
    c.align_horizontal_center = h.center;

    let v = resolve_axis(
        height_pct,
        parent.map(|p| p.height),
        attrs.top,
        attrs.bottom,
        attrs.vertical_center,
    );
    c.align_top = v.align_start;
    c.align_bottom = v.align_end;
    c.top = v.start;
    c.bottom = v.end;
    c.align_vertical_center = v.center;

    Some(c)
}

#[derive(Default)]
struct AxisConstraint {
    align_start: bool,
    align_end: bool,
    start: f32,
    end: f32,
    center: bool,
}

fn resolve_axis(
    percent: Option<f32>,
    parent: Option<f32>,
    start: Option<f32>,
    end: Option<f32>,
    center: Option<f32>,
) -> AxisConstraint {
    let mut axis = AxisConstraint::default();

    if let (Some(frac), Some(parent)) = (percent, parent) {
        let remaining = parent * (1.0 - frac);
        let (s, e) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            (Some(s), None) => (s, remaining - s),
            (None, Some(e)) => (remaining - e, e),
            (None, None) => (remaining / 2.0, remaining / 2.0),
        };
        axis.align_start = true;
        axis.align_end = true;
        axis.start = s;
        axis.end = e;
    } else if center == Some(0.0) {
        axis.center = true;
    } else {
        if let Some(s) = start {
            axis.align_start = true;
            axis.start = s;
        }
        if let Some(e) = end {
            axis.align_end = true;
            axis.end = e;
        }
    }

    axis
}
