//! EXML Import - Egret UI 标记编译器
//! 把 EXML 皮肤/界面编译为通用场景节点树，并导入整个 Egret 工程的资源

mod color;
mod geometry;
pub mod error;

pub use color::Color;
pub use error::{ImportError, Result};
pub use geometry::{Insets, Point, Rect, Size};

// EXML 解析器
pub mod parser;

// 编译选项、主题/资源配置
pub mod config;

// 资源定位与字体/图集描述
pub mod resource;

// 场景节点与行为
pub mod scene;

// 锚点布局
pub mod layout;

// 组件导入器
pub mod importer;

// EXML 编译器
pub mod compiler;

// 工程导入
pub mod project;

// 单元测试
#[cfg(test)]
mod tests;
