use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pharmafind_core::{InventoryStore, JsonFileStore, SqliteStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Single JSON document
    Json,
    /// SQLite database file
    Sqlite,
}

/// Store selection shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    #[arg(
        long,
        global = true,
        env = "PHARMAFIND_STORE",
        default_value = "inventory.json",
        help = "Path of the inventory store"
    )]
    pub store: PathBuf,

    #[arg(
        long,
        global = true,
        value_enum,
        env = "PHARMAFIND_BACKEND",
        default_value_t = Backend::Json,
        help = "Store format"
    )]
    pub backend: Backend,
}

impl StoreConfig {
    pub fn open(&self) -> Result<Box<dyn InventoryStore>> {
        Ok(match self.backend {
            Backend::Json => Box::new(JsonFileStore::new(&self.store)),
            Backend::Sqlite => Box::new(
                SqliteStore::open(&self.store)
                    .with_context(|| format!("opening {}", self.store.display()))?,
            ),
        })
    }
}
