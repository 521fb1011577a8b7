use crate::commands::Outcome;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

/// Writes the stored collection to `out` exactly as it is on disk.
pub fn run<B: StorageBackend, W: Write>(store: &RecordStore<B>, out: &mut W) -> Result<Outcome> {
    let bytes = store.read_raw()?;
    debug!(bytes = bytes.len(), "listing records");
    out.write_all(&bytes)?;
    Ok(Outcome::Listed)
}
