//! In-process store.

use crate::models::InventorySnapshot;

use super::{InventoryStore, StoreResult};

/// Keeps the snapshot in memory. Useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: InventorySnapshot,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> StoreResult<InventorySnapshot> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        self.snapshot = snapshot.clone();
        Ok(())
    }

    fn reset(&mut self) -> StoreResult<()> {
        self.snapshot = InventorySnapshot::default();
        Ok(())
    }
}
