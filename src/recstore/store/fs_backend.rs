use super::backend::StorageBackend;
use crate::error::{RecstoreError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage. Constructing one never touches the filesystem.
pub struct FileBackend {
    path: PathBuf,
    atomic: bool,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic: false,
        }
    }

    /// Write through a temporary sibling file and a rename instead of
    /// truncating the target in place.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records".to_string());
        let tmp_name = format!(".{}-{}.tmp", name, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }
}

impl FileBackend {
    /// Write `bytes` to `tmp_path` with the target's permissions, flush it to
    /// disk, then rename it over the target.
    fn write_replacement(&self, tmp_path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(tmp_path)
            .map_err(RecstoreError::Io)?;
        file.write_all(bytes).map_err(RecstoreError::Io)?;

        match fs::metadata(&self.path) {
            Ok(meta) => file
                .set_permissions(meta.permissions())
                .map_err(RecstoreError::Io)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(RecstoreError::Io(e)),
        }

        file.sync_all().map_err(RecstoreError::Io)?;
        drop(file);
        fs::rename(tmp_path, &self.path).map_err(RecstoreError::Io)
    }
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> Result<Vec<u8>> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(RecstoreError::Io)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(RecstoreError::Io)?;
        Ok(bytes)
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if self.atomic {
            let tmp_path = self.tmp_path();
            if let Err(e) = self.write_replacement(&tmp_path, bytes) {
                let _ = fs::remove_file(&tmp_path);
                return Err(e);
            }
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(RecstoreError::Io)?;
        file.write_all(bytes).map_err(RecstoreError::Io)?;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
