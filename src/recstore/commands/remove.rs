use crate::commands::{not_found_message, Outcome};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::{debug, info};

/// Removes the first record with `id`, keeping the order of the rest.
pub fn run<B: StorageBackend, W: Write>(
    store: &RecordStore<B>,
    out: &mut W,
    id: &str,
) -> Result<Outcome> {
    let mut records = store.load()?;
    debug!(id, total = records.len(), "removing record");

    let Some(position) = records.iter().position(|r| r.id == id) else {
        let message = not_found_message(id);
        info!("{}", message);
        out.write_all(message.as_bytes())?;
        return Ok(Outcome::NotFound(id.to_string()));
    };

    let removed = records.remove(position);
    store.save(&records)?;
    info!(id, remaining = records.len(), "record removed");
    Ok(Outcome::Removed(removed))
}
