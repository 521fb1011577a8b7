use super::backend::StorageBackend;
use crate::error::{RecstoreError, Result};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::Path;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since recstore is single-threaded,
/// so the `StorageBackend` trait can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    bytes: RefCell<Vec<u8>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RefCell::new(content.into()),
            ..Self::default()
        }
    }

    /// Current content, as it would be on disk.
    pub fn content_str(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Number of successful `write_all` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn read_all(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.borrow().clone())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RecstoreError::Io(io::Error::other("simulated write error")));
        }
        *self.bytes.borrow_mut() = bytes.to_vec();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> &Path {
        Path::new("<memory>")
    }
}
