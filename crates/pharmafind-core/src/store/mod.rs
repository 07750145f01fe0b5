//! Persistence for inventory snapshots.
//!
//! A store holds exactly one [`InventorySnapshot`]. Saving replaces it
//! wholesale; nothing is ever merged.

mod json;
mod memory;
mod sqlite;

pub use json::*;
pub use memory::*;
pub use sqlite::*;

use thiserror::Error;

use crate::models::InventorySnapshot;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing storage for the current inventory.
pub trait InventoryStore {
    /// Load the stored snapshot. An empty or missing store yields an empty
    /// snapshot.
    fn load(&self) -> StoreResult<InventorySnapshot>;

    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &InventorySnapshot) -> StoreResult<()>;

    /// Clear the store so the next load is empty.
    fn reset(&mut self) -> StoreResult<()>;
}

impl<T: InventoryStore + ?Sized> InventoryStore for Box<T> {
    fn load(&self) -> StoreResult<InventorySnapshot> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        (**self).save(snapshot)
    }

    fn reset(&mut self) -> StoreResult<()> {
        (**self).reset()
    }
}
