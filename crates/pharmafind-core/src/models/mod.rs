//! Domain models for the pharmafind system.

mod inventory;
mod search;

pub use inventory::*;
pub use search::*;
