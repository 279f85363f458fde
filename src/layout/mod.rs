//! 布局引擎：尺寸、锚点相对位置、透明度、变换、可见性与对齐约束

mod anchor_layout;

pub use anchor_layout::{LayoutAttrs, LayoutEngine, Length};
