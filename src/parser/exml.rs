//! EXML 解析器
//!
//! 只保留元素节点：文本、注释、CDATA、处理指令对上层不可见。
//! 每个元素都带有从祖先继承下来的命名空间前缀表。

use super::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;

const XMLNS: &str = "xmlns";

/// EXML 元素节点
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExmlNode {
    pub local_name: String,
    pub prefix: String,
    /// 前缀 -> URI（含继承），默认命名空间的前缀为空串
    pub namespaces: BTreeMap<String, String>,
    /// 按文档顺序排列的属性（不含 xmlns 声明）
    pub attributes: Vec<(String, String)>,
    pub children: Vec<ExmlNode>,
}

impl ExmlNode {
    /// 由限定名（`e:Image`）创建元素
    pub fn new_element(qualified_name: &str) -> Self {
        let (prefix, local_name) = match qualified_name.split_once(':') {
            Some((p, l)) => (p, l),
            None => ("", qualified_name),
        };
        Self {
            local_name: local_name.to_string(),
            prefix: prefix.to_string(),
            ..Default::default()
        }
    }

    pub fn qualified_name(&self) -> String {
        if self.prefix.is_empty() {
            self.local_name.clone()
        } else {
            format!("{}:{}", self.prefix, self.local_name)
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// 元素自身前缀对应的命名空间 URI
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespaces.get(&self.prefix).map(|s| s.as_str())
    }
}

/// EXML 解析器
pub struct ExmlParser<'a> {
    input: &'a str,
}

impl<'a> ExmlParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// 解析文档，返回唯一的根元素
    pub fn parse(&mut self) -> Result<ExmlNode, ParseError> {
        let mut reader = Reader::from_str(self.input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<ExmlNode> = Vec::new();
        let mut root: Option<ExmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let node = Self::open_element(&e, stack.last())?;
                    stack.push(node);
                }
                Ok(Event::Empty(e)) => {
                    let node = Self::open_element(&e, stack.last())?;
                    Self::close_element(node, &mut stack, &mut root)?;
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let node = stack.pop().ok_or_else(|| ParseError::MismatchedTag {
                        expected: String::new(),
                        found: name.clone(),
                    })?;
                    let expected = node.qualified_name();
                    if expected != name {
                        return Err(ParseError::MismatchedTag { expected, found: name });
                    }
                    Self::close_element(node, &mut stack, &mut root)?;
                }
                Ok(Event::Eof) => break,
                // 文本、注释、CDATA、处理指令、声明均忽略
                Ok(_) => {}
                Err(e) => return Err(ParseError::Xml(e.to_string())),
            }
        }

        if let Some(open) = stack.pop() {
            return Err(ParseError::UnclosedTag { tag: open.qualified_name() });
        }

        root.ok_or(ParseError::NoRootElement)
    }

    fn open_element(e: &BytesStart, parent: Option<&ExmlNode>) -> Result<ExmlNode, ParseError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        if name.is_empty() {
            return Err(ParseError::Xml("Empty tag name".to_string()));
        }

        let mut node = ExmlNode::new_element(&name);
        if let Some(p) = parent {
            node.namespaces = p.namespaces.clone();
        }

        for attr in e.attributes() {
            let attr = attr.map_err(|e| ParseError::Attribute(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| ParseError::Attribute(e.to_string()))?
                .into_owned();

            if key == XMLNS {
                node.namespaces.insert(String::new(), value);
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                node.namespaces.insert(prefix.to_string(), value);
            } else {
                node.attributes.push((key, value));
            }
        }

        Ok(node)
    }

    fn close_element(
        node: ExmlNode,
        stack: &mut [ExmlNode],
        root: &mut Option<ExmlNode>,
    ) -> Result<(), ParseError> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        if root.is_some() {
            return Err(ParseError::Xml(format!(
                "Unexpected second root element <{}>",
                node.qualified_name()
            )));
        }
        *root = Some(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let exml = r#"<e:Skin xmlns:e="http://ns.egret.com/eui" width="100"><e:Label text="Hi"/></e:Skin>"#;
        let root = ExmlParser::new(exml).parse().unwrap();

        assert_eq!(root.local_name, "Skin");
        assert_eq!(root.prefix, "e");
        assert_eq!(root.get_attr("width"), Some("100"));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].get_attr("text"), Some("Hi"));
    }

    #[test]
    fn test_namespaces_inherited() {
        let exml = r#"<e:Skin xmlns:e="http://ns.egret.com/eui" xmlns:ns1="skins.*">
            <e:Group><ns1:MyButton/></e:Group>
        </e:Skin>"#;
        let root = ExmlParser::new(exml).parse().unwrap();
        let inner = &root.children[0].children[0];

        assert_eq!(inner.prefix, "ns1");
        assert_eq!(inner.namespace_uri(), Some("skins.*"));
        assert_eq!(inner.namespaces.get("e").map(String::as_str), Some("http://ns.egret.com/eui"));
        assert!(root.attributes.iter().all(|(k, _)| !k.starts_with("xmlns")));
    }

    #[test]
    fn test_non_element_children_ignored() {
        let exml = r#"<?xml version="1.0" encoding="utf-8"?>
            <e:Skin xmlns:e="http://ns.egret.com/eui">
                <!-- comment -->
                some text
                <![CDATA[ raw ]]>
                <e:Image/>
            </e:Skin>"#;
        let root = ExmlParser::new(exml).parse().unwrap();

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].local_name, "Image");
    }

    #[test]
    fn test_attribute_entities_unescaped() {
        let exml = r#"<e:Label xmlns:e="http://ns.egret.com/eui" text="a &amp; b"/>"#;
        let root = ExmlParser::new(exml).parse().unwrap();
        assert_eq!(root.get_attr("text"), Some("a & b"));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(ExmlParser::new("<a><b></a>").parse().is_err());
        assert!(ExmlParser::new("<a><b/>").parse().is_err());
        assert!(matches!(ExmlParser::new("   ").parse(), Err(ParseError::NoRootElement)));
        assert!(ExmlParser::new("<a/><b/>").parse().is_err());
    }
}
