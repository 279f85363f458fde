//! 按结构识别散落的 JSON 配置文件

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `{ groups: [], resources: [] }`
    ResourceConfig,
    /// `{ skins: {}, exmls: [] }`
    ThemeConfig,
    /// `{ mc: {}, res: {} }`
    AnimationConfig,
}

impl JsonKind {
    /// 依次尝试各类结构，均不匹配时返回 None（按普通数据文件处理）
    pub fn classify(value: &Value) -> Option<JsonKind> {
        let obj = value.as_object()?;
        let is_array = |k: &str| obj.get(k).is_some_and(Value::is_array);
        let is_truthy = |k: &str| obj.get(k).is_some_and(truthy);

        if is_array("groups") && is_array("resources") {
            Some(JsonKind::ResourceConfig)
        } else if is_truthy("skins") && is_array("exmls") {
            Some(JsonKind::ThemeConfig)
        } else if is_truthy("mc") && is_truthy("res") {
            Some(JsonKind::AnimationConfig)
        } else {
            None
        }
    }

    /// 解析文本后分类，非法 JSON 返回 None
    pub fn classify_str(text: &str) -> Option<(JsonKind, Value)> {
        let value: Value = serde_json::from_str(text).ok()?;
        Self::classify(&value).map(|k| (k, value))
    }
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
