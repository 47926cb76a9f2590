use crate::core::collection::Collection;
use crate::core::confirm::{ConfirmationShell, ShellOutcome};
use crate::core::filter;
use crate::core::seed;
use crate::domain::model::{FilterState, Record, RecordId};

/// 一個畫面的狀態：自有集合、篩選條件與確認視窗。
pub struct CollectionView {
    name: &'static str,
    collection: Collection,
    filter: FilterState,
    search_fields: &'static [&'static str],
    shell: ConfirmationShell,
}

impl CollectionView {
    pub fn new(
        name: &'static str,
        records: Vec<Record>,
        search_fields: &'static [&'static str],
        filters: &[&str],
    ) -> Self {
        Self {
            name,
            collection: Collection::new(records),
            filter: FilterState::with_filters(filters),
            search_fields,
            shell: ConfirmationShell::new(),
        }
    }

    /// 管理後台的使用者表格
    pub fn user_admin(records: Vec<Record>) -> Self {
        Self::new("users", records, &["name", "email"], &["role", "status"])
    }

    /// 管理後台的作品表格
    pub fn artwork_admin(records: Vec<Record>) -> Self {
        Self::new("artworks", records, &["title", "artist"], &["status"])
    }

    pub fn gallery(records: Vec<Record>) -> Self {
        Self::new("gallery", records, &["title", "category"], &["category"])
    }

    pub fn seeded_user_admin() -> Self {
        Self::user_admin(seed::users())
    }

    pub fn seeded_artwork_admin() -> Self {
        Self::artwork_admin(seed::artworks())
    }

    pub fn seeded_gallery() -> Self {
        Self::gallery(seed::gallery())
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn shell(&self) -> &ConfirmationShell {
        &self.shell
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
    }

    pub fn select(&mut self, filter: &str, value: &str) {
        if !self.filter.categorical_filters.contains_key(filter) {
            tracing::debug!("{}: unknown filter '{}' added", self.name, filter);
        }
        self.filter.select(filter, value);
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    /// 每次呼叫都重新計算
    pub fn visible(&self) -> Vec<&Record> {
        let visible = filter::filter(self.collection.records(), &self.filter, self.search_fields);
        tracing::debug!(
            "{}: {} of {} records visible",
            self.name,
            visible.len(),
            self.collection.len()
        );
        visible
    }

    pub fn resolve_id(&self, raw: &str) -> Option<RecordId> {
        self.collection.resolve_id(raw)
    }

    pub fn open_create(&mut self) {
        self.shell.open(None);
    }

    /// 找不到 id 時不開啟，回傳 false
    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        self.open_with_target(id)
    }

    pub fn open_delete(&mut self, id: &RecordId) -> bool {
        self.open_with_target(id)
    }

    pub fn cancel(&mut self) {
        self.shell.cancel();
    }

    pub fn commit_edit(&mut self, new_values: Record) -> ShellOutcome {
        self.shell.commit_edit(new_values, &mut self.collection)
    }

    pub fn commit_delete(&mut self) -> ShellOutcome {
        self.shell.commit_delete(&mut self.collection)
    }

    fn open_with_target(&mut self, id: &RecordId) -> bool {
        match self.collection.get(id) {
            Some(record) => {
                self.shell.open(Some(record.clone()));
                true
            }
            None => {
                tracing::debug!("{}: record {} not found, shell stays closed", self.name, id);
                false
            }
        }
    }
}
