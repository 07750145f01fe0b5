//! Index cache keyed by a content digest of the inventory.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::Inventory;

use super::SearchIndex;

/// SHA-256 hex digest over the inventory's names and quantities.
///
/// Each name is NUL-terminated before its quantity so adjacent entries
/// cannot run together.
pub fn inventory_digest(inventory: &Inventory) -> String {
    let mut hasher = Sha256::new();
    for (name, quantity) in inventory {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update(quantity.to_be_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Holds the most recently built index and reuses it while the inventory
/// is unchanged.
#[derive(Debug, Default)]
pub struct IndexCache {
    digest: Option<String>,
    index: SearchIndex,
    builds: u64,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `inventory`, rebuilding it if the digest changed.
    pub fn get_or_build(&mut self, inventory: &Inventory) -> &SearchIndex {
        let digest = inventory_digest(inventory);
        if self.digest.as_deref() != Some(digest.as_str()) {
            self.index = SearchIndex::from_inventory(inventory);
            self.builds += 1;
            debug!(
                medicines = self.index.len(),
                height = self.index.height(),
                digest = %digest,
                "rebuilt search index"
            );
            self.digest = Some(digest);
        }
        &self.index
    }

    /// Drop the cached index.
    pub fn invalidate(&mut self) {
        self.digest = None;
        self.index = SearchIndex::new();
    }

    /// How many times the index has been (re)built.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
