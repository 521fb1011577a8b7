//! # Storage Layer
//!
//! Records live in a single backing file holding one JSON array. Every
//! invocation reads the whole array, works on it in memory and, for
//! mutating operations, writes the whole array back.
//!
//! Storage is split in two:
//!
//! - [`backend::StorageBackend`]: raw byte I/O.
//!   - [`fs_backend::FileBackend`]: production, one file on disk. Creates the
//!     file on first read; writes either truncate in place or go through a
//!     temporary file and a rename.
//!   - [`mem_backend::MemBackend`]: in-memory, for tests.
//! - [`RecordStore`]: decoding and encoding of the [`Collection`], applying
//!   the configured [`FormatPolicy`].
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","name":"Ann"},{"id":"2","name":"Bob"}]
//! ```
//!
//! An empty file is an empty collection. Output is always compact JSON, so
//! saving an unchanged collection that was written by recstore reproduces
//! the same bytes.
//!
//! There is no locking: two invocations on the same file at once can lose
//! an update.

use crate::config::FormatPolicy;
use crate::error::{RecstoreError, Result};
use crate::model::{Collection, Record};
use serde_json::Value;
use tracing::warn;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::StorageBackend;

pub struct RecordStore<B: StorageBackend> {
    backend: B,
    policy: FormatPolicy,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            policy: FormatPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FormatPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backing content exactly as stored.
    pub fn read_raw(&self) -> Result<Vec<u8>> {
        self.backend.read_all()
    }

    /// Load the full collection. Blank content is an empty collection.
    pub fn load(&self) -> Result<Collection> {
        let bytes = self.backend.read_all()?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Collection::new());
        }

        match serde_json::from_slice::<Collection>(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => match self.policy {
                FormatPolicy::Strict => Err(RecstoreError::Format(e)),
                FormatPolicy::Lenient => {
                    warn!(
                        location = %self.backend.location().display(),
                        error = %e,
                        "malformed backing content, salvaging what can be read"
                    );
                    Ok(salvage_collection(&bytes))
                }
            },
        }
    }

    /// Replace the stored collection.
    pub fn save(&self, records: &Collection) -> Result<()> {
        let bytes = serde_json::to_vec(records).map_err(RecstoreError::Format)?;
        self.backend.write_all(&bytes)
    }

    /// Decode a single record payload (the `--item` argument).
    pub fn parse_record(&self, payload: &str) -> Result<Record> {
        match serde_json::from_str::<Record>(payload) {
            Ok(record) => Ok(record),
            Err(e) => match self.policy {
                FormatPolicy::Strict => Err(RecstoreError::Format(e)),
                FormatPolicy::Lenient => {
                    warn!(error = %e, "malformed item, salvaging what can be read");
                    Ok(serde_json::from_str::<Value>(payload)
                        .map(Record::from_value_lossy)
                        .unwrap_or_default())
                }
            },
        }
    }
}

/// Lenient decoding: valid JSON that is an array keeps every element, each
/// turned into a record as best it can be. Anything else reads as empty.
fn salvage_collection(bytes: &[u8]) -> Collection {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Array(items)) => items.into_iter().map(Record::from_value_lossy).collect(),
        _ => Collection::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;

    #[test]
    fn empty_content_is_empty_collection() {
        let store = RecordStore::new(MemBackend::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn whitespace_content_is_empty_collection() {
        let store = RecordStore::new(MemBackend::with_content(" \n"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn loads_in_file_order() {
        let store = RecordStore::new(MemBackend::with_content(
            r#"[{"id":"b"},{"id":"a"},{"id":"c"}]"#,
        ));
        let ids: Vec<String> = store.load().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn save_of_unchanged_load_keeps_bytes() {
        let original = r#"[{"id":"1","name":"Ann","tags":["x"]},{"id":"2","age":30}]"#;
        let store = RecordStore::new(MemBackend::with_content(original));
        let records = store.load().unwrap();
        store.save(&records).unwrap();
        assert_eq!(store.backend().content_str(), original);
    }

    #[test]
    fn save_empty_collection_writes_empty_array() {
        let store = RecordStore::new(MemBackend::with_content(r#"[{"id":"1"}]"#));
        store.save(&Collection::new()).unwrap();
        assert_eq!(store.backend().content_str(), "[]");
    }

    #[test]
    fn strict_rejects_malformed_content() {
        let store = RecordStore::new(MemBackend::with_content("{oops"));
        assert!(matches!(store.load(), Err(RecstoreError::Format(_))));
    }

    #[test]
    fn lenient_reads_malformed_content_as_empty() {
        let store = RecordStore::new(MemBackend::with_content("{oops"))
            .with_policy(FormatPolicy::Lenient);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_keeps_number_literals_of_other_records() {
        let store = RecordStore::new(MemBackend::with_content(
            r#"[{"id":"1","big":123456789012345678901234,"f":1.50,"e":1e2}]"#,
        ));
        let mut records = store.load().unwrap();
        records.push(Record::new("2"));
        store.save(&records).unwrap();

        assert_eq!(
            store.backend().content_str(),
            r#"[{"id":"1","big":123456789012345678901234,"f":1.50,"e":1e2},{"id":"2"}]"#
        );
        // A second round trip must not drift either.
        let again = store.load().unwrap();
        store.save(&again).unwrap();
        assert_eq!(
            store.backend().content_str(),
            r#"[{"id":"1","big":123456789012345678901234,"f":1.50,"e":1e2},{"id":"2"}]"#
        );
    }

    #[test]
    fn strict_rejects_records_without_string_id() {
        for content in [r#"[{"name":"x"}]"#, r#"[{"id":1}]"#] {
            let store = RecordStore::new(MemBackend::with_content(content));
            assert!(
                matches!(store.load(), Err(RecstoreError::Format(_))),
                "accepted {}",
                content
            );
        }
    }

    #[test]
    fn lenient_keeps_records_without_string_id() {
        let store = RecordStore::new(MemBackend::with_content(r#"[{"name":"x"}]"#))
            .with_policy(FormatPolicy::Lenient);
        assert_eq!(
            store.load().unwrap(),
            vec![Record::new("").with_field("name", "x")]
        );

        let store = RecordStore::new(MemBackend::with_content(r#"[{"id":1}]"#))
            .with_policy(FormatPolicy::Lenient);
        assert_eq!(store.load().unwrap(), vec![Record::new("")]);
    }

    #[test]
    fn lenient_keeps_good_records_next_to_a_bad_one() {
        let store = RecordStore::new(MemBackend::with_content(
            r#"[{"id":"1","name":"Ann"},{"id":2}]"#,
        ))
        .with_policy(FormatPolicy::Lenient);
        assert_eq!(
            store.load().unwrap(),
            vec![Record::new("1").with_field("name", "Ann"), Record::new("")]
        );
    }

    #[test]
    fn lenient_reads_non_array_content_as_empty() {
        let store = RecordStore::new(MemBackend::with_content(r#"{"id":"1"}"#))
            .with_policy(FormatPolicy::Lenient);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn lenient_item_keeps_fields_without_id() {
        let store = RecordStore::new(MemBackend::new()).with_policy(FormatPolicy::Lenient);
        assert_eq!(
            store.parse_record(r#"{"name":"Ann"}"#).unwrap(),
            Record::new("").with_field("name", "Ann")
        );
    }

    #[test]
    fn strict_rejects_malformed_item() {
        let store = RecordStore::new(MemBackend::new());
        assert!(matches!(
            store.parse_record("not json"),
            Err(RecstoreError::Format(_))
        ));
        assert!(matches!(
            store.parse_record(r#"{"name":"no id"}"#),
            Err(RecstoreError::Format(_))
        ));
    }

    #[test]
    fn lenient_turns_malformed_item_into_empty_record() {
        let store = RecordStore::new(MemBackend::new()).with_policy(FormatPolicy::Lenient);
        assert_eq!(store.parse_record("not json").unwrap(), Record::default());
    }

    #[test]
    fn save_propagates_write_errors() {
        let store = RecordStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            store.save(&vec![Record::new("1")]),
            Err(RecstoreError::Io(_))
        ));
    }
}
