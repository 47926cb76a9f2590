use crate::domain::model::{FilterState, Record};

/// 依篩選狀態取出符合的紀錄，保持原本順序。
///
/// 搜尋文字為空時不限制；否則任一 `search_fields` 欄位（不分大小寫）包含搜尋文字即符合。
/// 類別篩選為完全比對，值為 `"all"` 時略過。所有條件以 AND 結合。
pub fn filter<'a>(
    records: &'a [Record],
    state: &FilterState,
    search_fields: &[&str],
) -> Vec<&'a Record> {
    let needle = state.search_text.to_lowercase();

    records
        .iter()
        .filter(|record| {
            matches_search(record, &needle, search_fields) && matches_categories(record, state)
        })
        .collect()
}

/// 單筆紀錄是否滿足所有啟用中的條件
pub fn matches(record: &Record, state: &FilterState, search_fields: &[&str]) -> bool {
    matches_search(record, &state.search_text.to_lowercase(), search_fields)
        && matches_categories(record, state)
}

fn matches_search(record: &Record, needle: &str, search_fields: &[&str]) -> bool {
    if needle.is_empty() {
        return true;
    }

    search_fields
        .iter()
        .filter_map(|field| record.get_str(field))
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_categories(record: &Record, state: &FilterState) -> bool {
    state
        .active_filters()
        .all(|(field, expected)| category_value(record, field).as_deref() == Some(expected))
}

// null / object / array 一律不符合
fn category_value(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
