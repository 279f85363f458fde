//! 命名空间 -> 皮肤键
//!
//! `e:Button` -> `eui.Button`；`xmlns:ns1="skins.*"` 下的 `ns1:Panel` -> `skins.Panel`。

use super::ExmlNode;
use std::collections::BTreeMap;

/// 内置组件命名空间的常用前缀
pub const EUI_PREFIX: &str = "e";
pub const EUI_NAMESPACE: &str = "http://ns.egret.com/eui";

const WILDCARD: char = '*';

/// 计算皮肤键；命名空间不受支持时返回空串
pub fn skin_key(local_name: &str, prefix: &str, namespaces: &BTreeMap<String, String>) -> String {
    let uri = namespaces.get(prefix).map(String::as_str);
    if prefix == EUI_PREFIX || uri == Some(EUI_NAMESPACE) {
        return format!("eui.{}", local_name);
    }

    match uri {
        Some(uri) if uri.contains(WILDCARD) => uri.replacen(WILDCARD, local_name, 1),
        _ => String::new(),
    }
}

pub fn skin_key_of(node: &ExmlNode) -> String {
    skin_key(&node.local_name, &node.prefix, &node.namespaces)
}

/// 组件类型名：皮肤键最后一个 `.` 之后的部分
pub fn widget_name(skin_key: &str) -> &str {
    match skin_key.rfind('.') {
        Some(idx) => &skin_key[idx + 1..],
        None => skin_key,
    }
}
