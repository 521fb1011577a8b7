use crate::commands::{already_exists_message, Outcome};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::{debug, info};

/// Appends the record in `item` unless its id is already taken.
pub fn run<B: StorageBackend, W: Write>(
    store: &RecordStore<B>,
    out: &mut W,
    item: &str,
) -> Result<Outcome> {
    debug!("adding record");
    let mut records = store.load()?;
    let record = store.parse_record(item)?;

    if records.iter().any(|r| r.id == record.id) {
        let message = already_exists_message(&record.id);
        info!("{}", message);
        out.write_all(message.as_bytes())?;
        return Ok(Outcome::AlreadyExists(record.id));
    }

    records.push(record.clone());
    store.save(&records)?;
    info!(id = %record.id, total = records.len(), "record added");
    Ok(Outcome::Added(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::config::FormatPolicy;
    use crate::error::RecstoreError;
    use crate::model::Record;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn appends_to_empty_store() {
        let store = RecordStore::new(MemBackend::with_content("[]"));
        let mut out = Vec::new();

        let outcome = run(&store, &mut out, r#"{"id":"1","name":"Ann"}"#).unwrap();

        assert_eq!(
            outcome,
            Outcome::Added(Record::new("1").with_field("name", "Ann"))
        );
        assert!(out.is_empty());
        assert_eq!(store.backend().content_str(), r#"[{"id":"1","name":"Ann"}]"#);
    }

    #[test]
    fn keeps_insertion_order() {
        let store = RecordStore::new(MemBackend::new());
        let mut out = Vec::new();
        run(&store, &mut out, r#"{"id":"2","name":"Bob"}"#).unwrap();
        run(&store, &mut out, r#"{"id":"1","name":"Ann"}"#).unwrap();

        let mut listed = Vec::new();
        list::run(&store, &mut listed).unwrap();
        assert_eq!(
            String::from_utf8(listed).unwrap(),
            r#"[{"id":"2","name":"Bob"},{"id":"1","name":"Ann"}]"#
        );
    }

    #[test]
    fn duplicate_id_is_reported_and_not_saved() {
        let original = r#"[{"id":"1","name":"Ann"}]"#;
        let store = RecordStore::new(MemBackend::with_content(original));
        let mut out = Vec::new();

        let outcome = run(&store, &mut out, r#"{"id":"1","name":"Other"}"#).unwrap();

        assert_eq!(outcome, Outcome::AlreadyExists("1".into()));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Item with id 1 already exists"
        );
        assert_eq!(store.backend().content_str(), original);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn malformed_item_fails_in_strict_mode() {
        let store = RecordStore::new(MemBackend::with_content("[]"));
        let mut out = Vec::new();

        let result = run(&store, &mut out, "{broken");

        assert!(matches!(result, Err(RecstoreError::Format(_))));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn malformed_item_becomes_empty_record_in_lenient_mode() {
        let store = RecordStore::new(MemBackend::with_content("[]"))
            .with_policy(FormatPolicy::Lenient);
        let mut out = Vec::new();

        let outcome = run(&store, &mut out, "{broken").unwrap();
        assert_eq!(outcome, Outcome::Added(Record::default()));
        assert_eq!(store.backend().content_str(), r#"[{"id":""}]"#);

        // A second malformed item collides with the first empty id.
        let outcome = run(&store, &mut out, "still broken").unwrap();
        assert_eq!(outcome, Outcome::AlreadyExists(String::new()));
    }

    #[test]
    fn lenient_add_keeps_records_with_bad_ids() {
        let store = RecordStore::new(MemBackend::with_content(
            r#"[{"id":"1","name":"Ann"},{"id":2}]"#,
        ))
        .with_policy(FormatPolicy::Lenient);
        let mut out = Vec::new();

        run(&store, &mut out, r#"{"id":"3"}"#).unwrap();
        assert_eq!(
            store.backend().content_str(),
            r#"[{"id":"1","name":"Ann"},{"id":""},{"id":"3"}]"#
        );
    }

    #[test]
    fn lenient_item_without_id_keeps_its_fields() {
        let store = RecordStore::new(MemBackend::with_content("[]"))
            .with_policy(FormatPolicy::Lenient);
        let mut out = Vec::new();

        run(&store, &mut out, r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(store.backend().content_str(), r#"[{"id":"","name":"Ann"}]"#);
    }

    #[test]
    fn adding_leaves_neighbours_numbers_untouched() {
        let store = RecordStore::new(MemBackend::with_content(
            r#"[{"id":"1","big":123456789012345678901234,"f":1.50,"e":1e2}]"#,
        ));
        let mut out = Vec::new();

        run(&store, &mut out, r#"{"id":"2","n":0.10}"#).unwrap();
        assert_eq!(
            store.backend().content_str(),
            r#"[{"id":"1","big":123456789012345678901234,"f":1.50,"e":1e2},{"id":"2","n":0.10}]"#
        );
    }

    #[test]
    fn write_failure_propagates() {
        let store = RecordStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        let mut out = Vec::new();

        let result = run(&store, &mut out, r#"{"id":"1"}"#);
        assert!(matches!(result, Err(RecstoreError::Io(_))));
    }
}
