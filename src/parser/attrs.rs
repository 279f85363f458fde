//! 属性读取工具
//!
//! 空字符串与缺失等价，一律回退到默认值。

use super::ExmlNode;

/// 读取属性，缺失或为空时返回默认值
pub fn get<'a>(node: &'a ExmlNode, name: &str, default: &'a str) -> &'a str {
    match node.get_attr(name) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// 属性是否存在且非空
pub fn has(node: &ExmlNode, name: &str) -> bool {
    node.get_attr(name).is_some_and(|v| !v.is_empty())
}

/// 按顺序取第一个非空属性（如 width / minWidth / maxWidth）
pub fn get_in_order<'a>(node: &'a ExmlNode, names: &[&str], default: &'a str) -> &'a str {
    names
        .iter()
        .filter_map(|name| node.get_attr(name))
        .find(|v| !v.is_empty())
        .unwrap_or(default)
}

/// 读取子元素上的属性
pub fn get_of_child<'a>(node: &'a ExmlNode, child: &str, name: &str, default: &'a str) -> &'a str {
    match first_child_by_local_name(node, child) {
        Some(c) => get(c, name, default),
        None => default,
    }
}

pub fn get_int(node: &ExmlNode, name: &str, default: i32) -> i32 {
    node.get_attr(name)
        .and_then(parse_leading_float)
        .map(|v| v.trunc() as i32)
        .unwrap_or(default)
}

pub fn get_float(node: &ExmlNode, name: &str, default: f32) -> f32 {
    node.get_attr(name).and_then(parse_leading_float).unwrap_or(default)
}

/// 布尔属性：忽略大小写与 "true" 比较
pub fn get_bool(node: &ExmlNode, name: &str, default: bool) -> bool {
    match node.get_attr(name) {
        Some(v) if !v.is_empty() => v.trim().eq_ignore_ascii_case("true"),
        _ => default,
    }
}

/// 在直接子元素中查找第一个本地名匹配的元素
pub fn first_child_by_local_name<'a>(node: &'a ExmlNode, name: &str) -> Option<&'a ExmlNode> {
    node.children.iter().find(|c| c.local_name == name)
}

/// 解析字符串开头的数字部分，`"50%"` -> 50，`"12px"` -> 12
pub fn parse_leading_float(s: &str) -> Option<f32> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while end < bytes.len() {
        let c = bytes[end];
        match c {
            b'0'..=b'9' => seen_digit = true,
            b'+' | b'-' if end == 0 => {}
            b'+' | b'-' if seen_exp && matches!(bytes[end - 1], b'e' | b'E') => {}
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => {
                // 仅当后面跟着数字时才算指数
                let rest = &bytes[end + 1..];
                let digits_follow = match rest.first() {
                    Some(b'+') | Some(b'-') => rest.get(1).is_some_and(u8::is_ascii_digit),
                    Some(d) => d.is_ascii_digit(),
                    None => false,
                };
                if !digits_follow {
                    break;
                }
                seen_exp = true;
            }
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse::<f32>().ok()
}
