//! One module per operation. Each `run` function loads what it needs from a
//! [`RecordStore`](crate::store::RecordStore), applies its rule, writes any
//! user-facing output to the sink it is given and reports what happened as
//! an [`Outcome`].

use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The raw collection was written to the sink.
    Listed,
    /// The record was appended and the collection saved.
    Added(Record),
    /// A record with this id already existed; nothing was saved.
    AlreadyExists(String),
    /// The matching record was written to the sink.
    Found(Record),
    /// The record was spliced out and the collection saved.
    Removed(Record),
    /// No record with this id. For find this leaves the sink empty.
    NotFound(String),
}

pub(crate) fn already_exists_message(id: &str) -> String {
    format!("Item with id {} already exists", id)
}

pub(crate) fn not_found_message(id: &str) -> String {
    format!("Item with id {} not found", id)
}
