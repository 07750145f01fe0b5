//! SQLite-backed store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{AlternativesMap, Inventory, InventorySnapshot};

use super::{InventoryStore, StoreResult};

/// Schema for the SQLite store.
pub const SQLITE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    name TEXT PRIMARY KEY,
    quantity INTEGER NOT NULL CHECK (quantity >= 0)
);

-- position keeps the priority order of each alternatives list
CREATE TABLE IF NOT EXISTS alternatives (
    name TEXT NOT NULL,
    position INTEGER NOT NULL,
    alternative TEXT NOT NULL,
    PRIMARY KEY (name, position)
);

CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

const SAVED_AT_KEY: &str = "saved_at";

/// Stores the snapshot in three tables inside a single SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open store at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SQLITE_SCHEMA)?;
        Ok(())
    }

    /// RFC 3339 timestamp of the last save, if any.
    pub fn last_saved_at(&self) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = ?",
                [SAVED_AT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn load_inventory(&self) -> StoreResult<Inventory> {
        let mut stmt = self.conn.prepare("SELECT name, quantity FROM inventory")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?)))?;

        let mut inventory = Inventory::new();
        for row in rows {
            let (name, quantity) = row?;
            inventory.insert(name, quantity);
        }
        Ok(inventory)
    }

    fn load_alternatives(&self) -> StoreResult<AlternativesMap> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, alternative FROM alternatives ORDER BY name, position")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut alternatives = AlternativesMap::new();
        for row in rows {
            let (name, alternative) = row?;
            alternatives.entry(name).or_default().push(alternative);
        }
        Ok(alternatives)
    }
}

impl InventoryStore for SqliteStore {
    fn load(&self) -> StoreResult<InventorySnapshot> {
        Ok(InventorySnapshot::new(
            self.load_inventory()?,
            self.load_alternatives()?,
        ))
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM inventory", [])?;
        tx.execute("DELETE FROM alternatives", [])?;

        {
            let mut insert_stock =
                tx.prepare("INSERT INTO inventory (name, quantity) VALUES (?1, ?2)")?;
            for (name, quantity) in &snapshot.inventory {
                insert_stock.execute(params![name, quantity])?;
            }

            let mut insert_alt = tx.prepare(
                "INSERT INTO alternatives (name, position, alternative) VALUES (?1, ?2, ?3)",
            )?;
            for (name, alts) in &snapshot.alternatives {
                for (position, alternative) in alts.iter().enumerate() {
                    insert_alt.execute(params![name, position as i64, alternative])?;
                }
            }
        }

        tx.execute(
            r#"
            INSERT INTO store_meta (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![SAVED_AT_KEY, chrono::Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn reset(&mut self) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM inventory", [])?;
        tx.execute("DELETE FROM alternatives", [])?;
        tx.execute("DELETE FROM store_meta", [])?;
        tx.commit()?;
        Ok(())
    }
}
