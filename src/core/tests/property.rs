use crate::{
    core::{
        collection::Collection,
        confirm::{ConfirmationShell, ShellOutcome},
        filter::{filter, matches},
        tags::TagEditor,
    },
    domain::model::{FilterState, Record, ALL},
};
use proptest::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;

const FIELDS: [&str; 4] = ["name", "email", "role", "status"];
const SEARCH_FIELDS: &[&str] = &["name", "email"];

fn arb_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 @.]{0,8}".prop_map(Value::String),
        prop_oneof![Just("artist"), Just("user"), Just("active"), Just("ALL")]
            .prop_map(|s| Value::String(s.to_string())),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        prop::collection::vec("[a-z]{0,3}".prop_map(Value::String), 0..3).prop_map(Value::Array),
    ]
}

fn arb_id() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        (0i64..6).prop_map(Value::from),
        Just(Value::from(i64::MAX)),
        Just(Value::from(i64::MIN)),
        "[0-9]{1,3}".prop_map(Value::String),
        "[a-z0-9-]{0,6}".prop_map(Value::String),
        Just(Value::String(i64::MAX.to_string())),
        Just(Value::Null),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::option::of(arb_id()),
        prop::collection::vec(prop::option::of(arb_field_value()), FIELDS.len()),
    )
        .prop_map(|(id, values)| {
            let mut data = BTreeMap::new();
            if let Some(id) = id {
                data.insert("id".to_string(), id);
            }
            for (name, value) in FIELDS.iter().zip(values) {
                if let Some(value) = value {
                    data.insert((*name).to_string(), value);
                }
            }
            Record { data }
        })
}

fn arb_choice() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(ALL.to_string()),
        Just("All".to_string()),
        Just("artist".to_string()),
        Just("active".to_string()),
        "[a-z0-9]{0,4}",
    ]
}

fn arb_filter_state() -> impl Strategy<Value = FilterState> {
    ("[a-zA-Z@. ]{0,3}", arb_choice(), arb_choice()).prop_map(|(search, role, status)| {
        let mut state = FilterState::with_filters(&["role", "status"]);
        state.set_search(&search);
        state.select("role", &role);
        state.select("status", &status);
        state
    })
}

#[derive(Clone, Debug)]
enum TagOp {
    SetDraft(String),
    Confirm,
    Remove(String),
    Delimited(String),
}

fn arb_tag_op() -> impl Strategy<Value = TagOp> {
    prop_oneof![
        "[ a-c,]{0,5}".prop_map(TagOp::SetDraft),
        Just(TagOp::Confirm),
        "[a-c]{0,2}".prop_map(TagOp::Remove),
        "[ a-c,]{0,8}".prop_map(TagOp::Delimited),
    ]
}

#[derive(Clone, Debug)]
enum ShellOp {
    OpenCreate,
    OpenTarget(usize),
    Cancel,
    CommitEdit(Record),
    CommitDelete,
}

fn arb_shell_op() -> impl Strategy<Value = ShellOp> {
    prop_oneof![
        Just(ShellOp::OpenCreate),
        any::<usize>().prop_map(ShellOp::OpenTarget),
        Just(ShellOp::Cancel),
        arb_record().prop_map(ShellOp::CommitEdit),
        Just(ShellOp::CommitDelete),
    ]
}

proptest! {
    #[test]
    fn filter_result_is_ordered_partition(
        records in prop::collection::vec(arb_record(), 0..12),
        state in arb_filter_state(),
    ) {
        let result = filter(&records, &state, SEARCH_FIELDS);

        let positions: Vec<usize> = result
            .iter()
            .filter_map(|kept| records.iter().position(|r| std::ptr::eq(r, *kept)))
            .collect();
        prop_assert_eq!(positions.len(), result.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for (index, record) in records.iter().enumerate() {
            prop_assert_eq!(
                positions.contains(&index),
                matches(record, &state, SEARCH_FIELDS)
            );
        }
    }

    #[test]
    fn unconstrained_filter_is_identity(records in prop::collection::vec(arb_record(), 0..12)) {
        let state = FilterState::with_filters(&["role", "status"]);
        let result = filter(&records, &state, SEARCH_FIELDS);

        prop_assert_eq!(result.len(), records.len());
        prop_assert!(result.iter().zip(&records).all(|(kept, r)| std::ptr::eq(*kept, r)));
    }

    #[test]
    fn tag_editor_keeps_unique_trimmed_tags(ops in prop::collection::vec(arb_tag_op(), 0..20)) {
        let mut editor = TagEditor::new();

        for op in ops {
            match op {
                TagOp::SetDraft(text) => editor.set_draft(&text),
                TagOp::Confirm => {
                    editor.confirm_draft();
                    prop_assert!(editor.draft().is_empty());
                }
                TagOp::Remove(value) => {
                    editor.remove_tag(&value);
                    prop_assert!(!editor.contains(&value));
                }
                TagOp::Delimited(input) => {
                    editor.extend_from_delimited(&input);
                }
            }

            let tags = editor.tags();
            for (i, tag) in tags.iter().enumerate() {
                prop_assert!(!tag.is_empty());
                prop_assert_eq!(tag.trim(), tag.as_str());
                prop_assert!(!tags[i + 1..].contains(tag));
            }
        }
    }

    #[test]
    fn collection_allocation_never_panics(
        records in prop::collection::vec(arb_record(), 0..8),
        extra in prop::collection::vec(arb_record(), 0..4),
    ) {
        let mut collection = Collection::new(records);
        for record in extra {
            collection.append(record);
        }

        if let Some(id) = collection.allocate_id() {
            prop_assert!(!collection.conflicts(&id));
        }
    }

    #[test]
    fn shell_sequences_keep_collection_consistent(
        records in prop::collection::vec(arb_record(), 0..6),
        ops in prop::collection::vec(arb_shell_op(), 0..16),
    ) {
        let mut collection = Collection::new(records);
        let mut shell = ConfirmationShell::new();

        for op in ops {
            let before = collection.clone();
            match op {
                ShellOp::OpenCreate => shell.open(None),
                ShellOp::OpenTarget(index) => {
                    let target = match collection.len() {
                        0 => None,
                        len => collection.records().get(index % len).cloned(),
                    };
                    shell.open(target);
                }
                ShellOp::Cancel => {
                    shell.cancel();
                    prop_assert_eq!(&collection, &before);
                }
                ShellOp::CommitEdit(values) => {
                    match shell.commit_edit(values, &mut collection) {
                        ShellOutcome::Created(id) => {
                            prop_assert!(!before.conflicts(&id));
                            prop_assert_eq!(collection.len(), before.len() + 1);
                        }
                        ShellOutcome::Replaced(_) => {
                            prop_assert_eq!(collection.len(), before.len());
                        }
                        ShellOutcome::Deleted(_) => prop_assert!(false, "edit never deletes"),
                        ShellOutcome::Discarded => prop_assert_eq!(&collection, &before),
                    }
                    prop_assert!(!shell.is_open());
                }
                ShellOp::CommitDelete => {
                    match shell.commit_delete(&mut collection) {
                        ShellOutcome::Deleted(_) => {
                            prop_assert_eq!(collection.len() + 1, before.len());
                        }
                        ShellOutcome::Discarded => prop_assert_eq!(&collection, &before),
                        other => prop_assert!(false, "unexpected outcome {:?}", other),
                    }
                    prop_assert!(!shell.is_open());
                }
            }
        }
    }
}
