//! 锚点布局单元测试
//! 直接对节点应用布局，不经过编译器

use super::support::*;
use crate::config::YAxisConvention;
use crate::compiler::ArtifactHandle;
use crate::geometry::Size;
use crate::layout::{LayoutAttrs, LayoutEngine, Length};
use crate::scene::{CompiledNode, ANCHOR_TOP_LEFT};

fn layout(exml: &str, parent: Option<Size>) -> CompiledNode {
    let element = parse(exml);
    let mut node = CompiledNode::new("n");
    LayoutEngine::default().apply(&mut node, &element, parent);
    node
}

/// 测试尺寸值解析
#[test]
fn test_length_parse() {
    assert_eq!(Length::parse("50%"), Some(Length::Percent(0.5)));
    assert_eq!(Length::parse("50"), Some(Length::Points(50.0)));
    assert_eq!(Length::parse(""), None);
    assert_eq!(Length::Percent(0.25).resolve(200.0), 50.0);
    assert_eq!(Length::Points(30.0).resolve(200.0), 30.0);
}

/// 测试 minWidth / maxWidth 作为 width 的回退
#[test]
fn test_size_fallback_attributes() {
    let node = layout(r#"<a minWidth="40" maxHeight="70"/>"#, None);
    assert_eq!(node.size, Size::new(40.0, 70.0));
}

/// 测试变换属性
#[test]
fn test_transform_attributes() {
    let node = layout(
        r#"<a x="5" y="6" scaleX="2" scaleY="0.5" rotation="90" visible="false"/>"#,
        None,
    );

    assert_eq!(node.anchor, ANCHOR_TOP_LEFT);
    assert_eq!(node.position.x, 5.0);
    assert_eq!(node.position.y, -6.0);
    assert_eq!(node.scale_x, 2.0);
    assert_eq!(node.scale_y, 0.5);
    assert_eq!(node.rotation, 90.0);
    assert!(!node.active);
}

/// 测试无父节点时百分比尺寸解析为 0 且不生成拉伸约束
#[test]
fn test_percentage_without_parent() {
    let node = layout(r#"<a width="50%"/>"#, None);
    assert_eq!(node.size.width, 0.0);
    assert_eq!(node.width_percent, Some(0.5));
    let c = node.constraint.unwrap();
    assert!(!c.align_left && !c.align_right);
}

/// 测试百分比纵向拉伸与上下边距
#[test]
fn test_vertical_percentage_constraint() {
    let node = layout(r#"<a height="25%" bottom="10"/>"#, Some(Size::new(100.0, 200.0)));
    let c = node.constraint.unwrap();

    assert_eq!(node.size.height, 50.0);
    assert!(c.align_top && c.align_bottom);
    assert_eq!(c.bottom, 10.0);
    assert_eq!(c.top, 140.0);
}

/// 测试百分比优先于居中
#[test]
fn test_percentage_wins_over_center() {
    let node = layout(
        r#"<a width="50%" horizontalCenter="0" verticalCenter="0"/>"#,
        Some(Size::new(200.0, 100.0)),
    );
    let c = node.constraint.unwrap();

    assert!(!c.align_horizontal_center);
    assert!(c.align_left && c.align_right);
    assert!(c.align_vertical_center);
}

/// 测试非零居中偏移不产生居中约束
#[test]
fn test_nonzero_center_ignored() {
    let node = layout(r#"<a horizontalCenter="10" right="4"/>"#, Some(Size::new(200.0, 100.0)));
    let c = node.constraint.unwrap();

    assert!(!c.align_horizontal_center);
    assert!(c.align_right);
    assert_eq!(c.right, 4.0);
}

/// 测试皮肤实例按轴沿用皮肤尺寸
#[test]
fn test_skin_instance_size_per_axis() {
    let element = parse(r#"<a height="12"/>"#);
    let mut node = CompiledNode::new("n");
    node.size = Size::new(80.0, 30.0);
    node.skin = Some(ArtifactHandle::new("db://assets/Skin.prefab"));
    LayoutEngine::default().apply(&mut node, &element, None);
    assert_eq!(node.size, Size::new(80.0, 12.0));

    // 普通节点未声明尺寸时为 0
    let mut plain = CompiledNode::new("p");
    plain.size = Size::new(80.0, 30.0);
    LayoutEngine::default().apply(&mut plain, &element, None);
    assert_eq!(plain.size, Size::new(0.0, 12.0));
}

/// 测试 ParentFlip 约定使用父节点高度
#[test]
fn test_parent_flip() {
    let element = parse(r#"<a y="30" anchorOffsetY="10"/>"#);
    let attrs = LayoutAttrs::from_element(&element);
    let mut node = CompiledNode::new("n");

    LayoutEngine::new(YAxisConvention::ParentFlip).apply_attrs(&mut node, &attrs, Some(Size::new(0.0, 300.0)));
    assert_eq!(node.position.y, 280.0);

    LayoutEngine::new(YAxisConvention::AnchorOffset).apply_attrs(&mut node, &attrs, Some(Size::new(0.0, 300.0)));
    assert_eq!(node.position.y, -20.0);
}
