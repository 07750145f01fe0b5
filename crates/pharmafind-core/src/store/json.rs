//! Single JSON document store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::InventorySnapshot;

use super::{InventoryStore, StoreError, StoreResult};

/// Contents written on reset.
const EMPTY_DOCUMENT: &str = "{}";

/// Stores the snapshot as `{"inventory": {...}, "alternatives": {...}}` in
/// one file. There is no locking; one writer at a time is assumed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Replace the file contents via a temp file in the same directory, so a
    /// failed write never leaves a half-written document behind.
    fn write_atomic(&self, contents: &str) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> StoreResult<InventorySnapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(InventorySnapshot::default());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(InventorySnapshot::default());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        let json = serde_json::to_string(snapshot)?;
        self.write_atomic(&json)?;
        Ok(())
    }

    fn reset(&mut self) -> StoreResult<()> {
        self.write_atomic(EMPTY_DOCUMENT)?;
        Ok(())
    }
}
