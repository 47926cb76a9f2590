/// 上傳表單的標籤編輯器：保持插入順序、不重複的標籤清單加上一個草稿欄位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    tags: Vec<String>,
    draft: String,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// 確認草稿。空白或重複時不加入，但草稿一律清空。
    pub fn confirm_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        self.push_unique(draft.trim())
    }

    /// 逗號分隔輸入，每一段都套用與 `confirm_draft` 相同的規則
    pub fn extend_from_delimited(&mut self, input: &str) -> usize {
        input
            .split(',')
            .filter(|piece| self.push_unique(piece.trim()))
            .count()
    }

    pub fn remove_tag(&mut self, value: &str) -> bool {
        match self.tags.iter().position(|tag| tag == value) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.tags.iter().any(|tag| tag == value)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }

    fn push_unique(&mut self, candidate: &str) -> bool {
        if candidate.is_empty() || self.contains(candidate) {
            tracing::debug!("Tag '{}' ignored (blank or duplicate)", candidate);
            return false;
        }
        self.tags.push(candidate.to_string());
        true
    }
}
