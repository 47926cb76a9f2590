use crate::core::collection::Collection;
use crate::domain::model::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ShellState {
    #[default]
    Closed,
    /// `None` 代表新增模式
    Open(Option<Record>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    Created(RecordId),
    Replaced(RecordId),
    Deleted(RecordId),
    Discarded,
}

/// 編輯／刪除確認視窗。
///
/// 所有 commit 結束後都回到 `Closed`。在 `Closed` 狀態下 commit、在新增模式下刪除、
/// 或目標已不在集合中，都只記錄警告並回傳 `Discarded`，集合不會被修改。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmationShell {
    state: ShellState,
}

impl ConfirmationShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ShellState::Open(_))
    }

    pub fn target(&self) -> Option<&Record> {
        match &self.state {
            ShellState::Open(target) => target.as_ref(),
            ShellState::Closed => None,
        }
    }

    pub fn open(&mut self, target: Option<Record>) {
        if self.is_open() {
            tracing::debug!("Shell reopened, previous pending action dismissed");
        }
        self.state = ShellState::Open(target);
    }

    pub fn cancel(&mut self) {
        self.state = ShellState::Closed;
    }

    pub fn commit_edit(&mut self, new_values: Record, collection: &mut Collection) -> ShellOutcome {
        match std::mem::take(&mut self.state) {
            ShellState::Closed => {
                tracing::warn!("⚠️ Edit committed while shell is closed; ignored");
                ShellOutcome::Discarded
            }
            ShellState::Open(None) => Self::create(new_values, collection),
            ShellState::Open(Some(target)) => Self::overwrite(&target, new_values, collection),
        }
    }

    pub fn commit_delete(&mut self, collection: &mut Collection) -> ShellOutcome {
        match std::mem::take(&mut self.state) {
            ShellState::Open(Some(target)) => {
                let removed = target
                    .id()
                    .and_then(|id| collection.remove(&id).map(|_| id));
                match removed {
                    Some(id) => {
                        tracing::info!("🗑️ Deleted record {}", id);
                        ShellOutcome::Deleted(id)
                    }
                    None => {
                        tracing::warn!("⚠️ Delete target no longer in collection; ignored");
                        ShellOutcome::Discarded
                    }
                }
            }
            ShellState::Open(None) => {
                tracing::warn!("⚠️ Delete committed in create mode; ignored");
                ShellOutcome::Discarded
            }
            ShellState::Closed => {
                tracing::warn!("⚠️ Delete committed while shell is closed; ignored");
                ShellOutcome::Discarded
            }
        }
    }

    fn create(mut record: Record, collection: &mut Collection) -> ShellOutcome {
        let id = match record.id().map(|id| collection.normalize_id(id)) {
            Some(id) if collection.conflicts(&id) => {
                tracing::warn!("⚠️ New record reuses existing id {}; ignored", id);
                return ShellOutcome::Discarded;
            }
            Some(id) => id,
            None => match collection.allocate_id() {
                Some(id) => id,
                None => {
                    tracing::warn!("⚠️ Id counter exhausted; new record ignored");
                    return ShellOutcome::Discarded;
                }
            },
        };
        record.set_id(&id);

        collection.append(record);
        tracing::info!("➕ Created record {}", id);
        ShellOutcome::Created(id)
    }

    fn overwrite(target: &Record, new_values: Record, collection: &mut Collection) -> ShellOutcome {
        let Some(id) = target.id() else {
            tracing::warn!("⚠️ Edit target has no id; ignored");
            return ShellOutcome::Discarded;
        };
        let Some(current) = collection.get(&id) else {
            tracing::warn!("⚠️ Edit target {} no longer in collection; ignored", id);
            return ShellOutcome::Discarded;
        };

        let mut updated = current.clone();
        for (field, value) in new_values.data {
            if field != "id" {
                updated.data.insert(field, value);
            }
        }

        collection.replace(&id, updated);
        tracing::info!("✏️ Updated record {}", id);
        ShellOutcome::Replaced(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Collection {
        Collection::new(vec![
            Record::new()
                .with("id", "1")
                .with("name", "John Doe")
                .with("status", "active"),
            Record::new()
                .with("id", "2")
                .with("name", "Jane Smith")
                .with("status", "active"),
        ])
    }

    #[test]
    fn test_cancel_leaves_collection_unchanged() {
        let mut collection = users();
        let before = collection.clone();
        let mut shell = ConfirmationShell::new();

        shell.open(collection.get(&RecordId::from("1")).cloned());
        assert!(shell.is_open());
        shell.cancel();

        assert_eq!(shell.state(), &ShellState::Closed);
        assert_eq!(collection, before);

        // 取消後再 commit 也不應動到集合
        assert_eq!(
            shell.commit_delete(&mut collection),
            ShellOutcome::Discarded
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_commit_delete_removes_target() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(collection.get(&RecordId::from("2")).cloned());
        let outcome = shell.commit_delete(&mut collection);

        assert_eq!(outcome, ShellOutcome::Deleted(RecordId::from("2")));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].id(), Some(RecordId::from("1")));
        assert!(!shell.is_open());
    }

    #[test]
    fn test_commit_edit_overwrites_fields_and_keeps_id() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(collection.get(&RecordId::from("1")).cloned());
        let changes = Record::new().with("id", "99").with("status", "suspended");
        let outcome = shell.commit_edit(changes, &mut collection);

        assert_eq!(outcome, ShellOutcome::Replaced(RecordId::from("1")));
        let john = collection.get(&RecordId::from("1")).unwrap();
        assert_eq!(john.get_str("status"), Some("suspended"));
        assert_eq!(john.get_str("name"), Some("John Doe"));
        assert!(!collection.contains(&RecordId::from("99")));
        assert_eq!(collection.records()[0].id(), Some(RecordId::from("1")));
    }

    #[test]
    fn test_commit_edit_in_create_mode_appends_with_fresh_id() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("name", "Rina"), &mut collection);

        assert_eq!(outcome, ShellOutcome::Created(RecordId::from("3")));
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.records()[2].get_str("name"), Some("Rina"));
    }

    #[test]
    fn test_create_with_duplicate_id_is_discarded() {
        let mut collection = users();
        let before = collection.clone();
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("id", "2"), &mut collection);

        assert_eq!(outcome, ShellOutcome::Discarded);
        assert_eq!(collection, before);
        assert!(!shell.is_open());
    }

    #[test]
    fn test_commits_while_closed_are_discarded() {
        let mut collection = users();
        let before = collection.clone();
        let mut shell = ConfirmationShell::new();

        assert_eq!(
            shell.commit_edit(Record::new().with("name", "X"), &mut collection),
            ShellOutcome::Discarded
        );
        assert_eq!(shell.commit_delete(&mut collection), ShellOutcome::Discarded);
        assert_eq!(collection, before);
    }

    #[test]
    fn test_delete_in_create_mode_is_discarded() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        assert_eq!(shell.commit_delete(&mut collection), ShellOutcome::Discarded);
        assert_eq!(collection.len(), 2);
        assert!(!shell.is_open());
    }

    #[test]
    fn test_edit_of_vanished_target_is_discarded() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(collection.get(&RecordId::from("2")).cloned());
        collection.remove(&RecordId::from("2"));
        let before = collection.clone();

        let outcome = shell.commit_edit(Record::new().with("name", "Ghost"), &mut collection);
        assert_eq!(outcome, ShellOutcome::Discarded);
        assert_eq!(collection, before);
    }

    #[test]
    fn test_reopen_replaces_pending_target() {
        let collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(collection.get(&RecordId::from("1")).cloned());
        shell.open(collection.get(&RecordId::from("2")).cloned());

        assert_eq!(
            shell.target().and_then(Record::id),
            Some(RecordId::from("2"))
        );
    }

    #[test]
    fn test_create_with_same_id_of_other_type_is_discarded() {
        let mut collection = users();
        let before = collection.clone();
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("id", 2), &mut collection);

        assert_eq!(outcome, ShellOutcome::Discarded);
        assert_eq!(collection, before);
    }

    #[test]
    fn test_create_stores_id_in_collection_type() {
        let mut collection = users();
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("id", 7), &mut collection);

        assert_eq!(outcome, ShellOutcome::Created(RecordId::from("7")));
        assert_eq!(collection.resolve_id("7"), Some(RecordId::from("7")));
    }

    #[test]
    fn test_create_with_max_id_then_exhausted_counter() {
        let mut collection = Collection::new(vec![Record::new().with("id", 1)]);
        let mut shell = ConfirmationShell::new();

        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("id", i64::MAX), &mut collection);
        assert_eq!(outcome, ShellOutcome::Created(RecordId::Number(i64::MAX)));

        let before = collection.clone();
        shell.open(None);
        let outcome = shell.commit_edit(Record::new().with("name", "One more"), &mut collection);

        assert_eq!(outcome, ShellOutcome::Discarded);
        assert_eq!(collection, before);
        assert!(!shell.is_open());
    }
}
