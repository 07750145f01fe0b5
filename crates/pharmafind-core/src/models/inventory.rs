//! Inventory and alternatives models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Medicine name → units in stock.
pub type Inventory = BTreeMap<String, u32>;

/// Medicine name → substitutes, highest priority first.
pub type AlternativesMap = BTreeMap<String, Vec<String>>;

/// A single stocked medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineRecord {
    /// Unique, case-sensitive medicine name
    pub name: String,
    /// Units currently in stock
    pub quantity: u32,
}

impl MedicineRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Whether at least one unit is available.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Everything one upload produces, and what the store persists.
///
/// Serializes to the reference document layout:
///
/// ```json
/// {"inventory": {"Dolo": 3}, "alternatives": {"Paracetamol": ["Crocin", "Dolo"]}}
/// ```
///
/// Both keys default to empty so that `{}` (a reset store) loads cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub alternatives: AlternativesMap,
}

impl InventorySnapshot {
    /// Create a snapshot from its two mappings.
    pub fn new(inventory: Inventory, alternatives: AlternativesMap) -> Self {
        Self {
            inventory,
            alternatives,
        }
    }

    /// True when neither stock nor alternatives are recorded.
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty() && self.alternatives.is_empty()
    }
}
