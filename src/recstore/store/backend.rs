use crate::error::Result;
use std::path::Path;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `RecordStore` handles the "what" (decoding, format policy, collection
/// semantics).
pub trait StorageBackend {
    /// Read the full backing content.
    /// A missing backing file is created empty and read as zero bytes.
    fn read_all(&self) -> Result<Vec<u8>>;

    /// Replace the full backing content.
    fn write_all(&self, bytes: &[u8]) -> Result<()>;

    /// Location of the backing content, for logging.
    fn location(&self) -> &Path;
}
