use crate::commands::Outcome;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

/// Writes the record with `id` to `out`. If several records share the id the
/// last one wins. A miss writes nothing.
pub fn run<B: StorageBackend, W: Write>(
    store: &RecordStore<B>,
    out: &mut W,
    id: &str,
) -> Result<Outcome> {
    debug!(id, "finding record");
    let records = store.load()?;

    match records.into_iter().rev().find(|r| r.id == id) {
        Some(record) => {
            let bytes = serde_json::to_vec(&record)?;
            out.write_all(&bytes)?;
            Ok(Outcome::Found(record))
        }
        None => {
            debug!(id, "no record matched");
            Ok(Outcome::NotFound(id.to_string()))
        }
    }
}
