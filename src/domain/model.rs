use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 類別篩選的「不限」值
pub const ALL: &str = "all";

/// `"all"` 不分大小寫都視為不限（畫廊按鈕用的是 `"All"`）
pub fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case(ALL)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(RecordId::Number),
            serde_json::Value::String(s) => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        match self {
            RecordId::Number(n) => serde_json::Value::Number((*n).into()),
            RecordId::Text(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// 數字 id 或可解析成數字的字串 id
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RecordId::Number(n) => Some(*n),
            RecordId::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(field.to_string(), value.into());
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<serde_json::Value>) {
        self.data.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(|v| v.as_str())
    }

    pub fn id(&self) -> Option<RecordId> {
        self.data.get("id").and_then(RecordId::from_value)
    }

    pub fn set_id(&mut self, id: &RecordId) {
        self.data.insert("id".to_string(), id.to_value());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub categorical_filters: BTreeMap<String, String>,
}

impl FilterState {
    /// 每個篩選欄位都從 "all" 開始
    pub fn with_filters(names: &[&str]) -> Self {
        Self {
            search_text: String::new(),
            categorical_filters: names
                .iter()
                .map(|name| (name.to_string(), ALL.to_string()))
                .collect(),
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    pub fn select(&mut self, filter: &str, value: &str) {
        self.categorical_filters
            .insert(filter.to_string(), value.to_string());
    }

    pub fn reset(&mut self) {
        self.search_text.clear();
        for value in self.categorical_filters.values_mut() {
            *value = ALL.to_string();
        }
    }

    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categorical_filters
            .iter()
            .filter(|(_, value)| !is_all(value))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty() && self.active_filters().next().is_none()
    }
}
