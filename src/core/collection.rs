use crate::domain::model::{Record, RecordId};

/// 單一畫面獨佔的記憶體內紀錄集合。
///
/// 新 id 由遞增計數器配發，移除後也不會重複使用。
/// 計數器超過 `i64::MAX` 後即耗盡，之後不再配發。
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    records: Vec<Record>,
    /// `None` 代表計數器已耗盡
    next_id: Option<i64>,
    text_ids: bool,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Self {
        let ids: Vec<RecordId> = records.iter().filter_map(Record::id).collect();
        let highest = ids.iter().filter_map(RecordId::as_number).max().unwrap_or(0);
        let text_ids = ids.iter().any(|id| matches!(id, RecordId::Text(_)));

        Self {
            records,
            next_id: highest.checked_add(1),
            text_ids,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id().as_ref() == Some(id))
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// 以顯示形式比對，數字 `2` 與字串 `"2"` 視為同一個 id
    pub fn conflicts(&self, id: &RecordId) -> bool {
        self.resolve_id(&id.to_string()).is_some()
    }

    /// 轉成集合慣用的 id 型別：字串 id 集合收到數字時轉為字串，反之亦然
    pub fn normalize_id(&self, id: RecordId) -> RecordId {
        match id {
            RecordId::Number(n) if self.text_ids => RecordId::Text(n.to_string()),
            RecordId::Text(s) if !self.text_ids && !self.records.is_empty() => {
                match s.parse::<i64>() {
                    Ok(n) if n.to_string() == s => RecordId::Number(n),
                    _ => RecordId::Text(s),
                }
            }
            other => other,
        }
    }

    /// 以字串形式比對 id，供 CLI 參數使用
    pub fn resolve_id(&self, raw: &str) -> Option<RecordId> {
        self.records
            .iter()
            .filter_map(Record::id)
            .find(|id| id.to_string() == raw)
    }

    /// 配發新的 id；集合原本用字串 id 時也回傳字串。計數器耗盡時回傳 `None`。
    pub fn allocate_id(&mut self) -> Option<RecordId> {
        let mut candidate = self.next_id?;
        loop {
            let id = if self.text_ids {
                RecordId::Text(candidate.to_string())
            } else {
                RecordId::Number(candidate)
            };
            let next = candidate.checked_add(1);
            if !self.conflicts(&id) {
                self.next_id = next;
                return Some(id);
            }
            match next {
                Some(next) => candidate = next,
                None => {
                    self.next_id = None;
                    return None;
                }
            }
        }
    }

    pub fn append(&mut self, record: Record) {
        if let Some(number) = record.id().as_ref().and_then(RecordId::as_number) {
            self.next_id = match (self.next_id, number.checked_add(1)) {
                (Some(current), Some(after)) => Some(current.max(after)),
                _ => None,
            };
        }
        self.records.push(record);
    }

    /// 以 id 取代整筆紀錄，找不到時回傳 false
    pub fn replace(&mut self, id: &RecordId, record: Record) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        self.position(id).map(|index| self.records.remove(index))
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id().as_ref() == Some(id))
    }
}
