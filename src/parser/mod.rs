//! EXML 解析：元素树、属性读取、命名空间到皮肤键的映射

pub mod attrs;
pub mod exml;
pub mod namespace;

pub use exml::{ExmlNode, ExmlParser};
pub use namespace::{skin_key, skin_key_of, widget_name};

/// 标记解析错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(String),

    #[error("Invalid attribute: {0}")]
    Attribute(String),

    #[error("Unclosed tag: {tag}")]
    UnclosedTag { tag: String },

    #[error("Mismatched tags: {expected} vs {found}")]
    MismatchedTag { expected: String, found: String },

    #[error("Document has no root element")]
    NoRootElement,
}
