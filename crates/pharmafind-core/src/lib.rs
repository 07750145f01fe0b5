//! PharmaFind Core Library
//!
//! Pharmacy stock lookup with alternative-medicine suggestions.
//!
//! # Architecture
//!
//! ```text
//! Uploaded text ──► Parser ──► InventorySnapshot ──► InventoryStore
//!                                                        │
//!                                      load on every interaction
//!                                                        │
//!                                                        ▼
//!                                     SearchIndex (cached by digest)
//!                                                        │
//!                        Query ──► prefix_search ──► hits
//!                                                        │
//!                                          out of stock? │
//!                                                        ▼
//!                                             AlternativeResolver
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (InventorySnapshot, SearchHit, etc.)
//! - [`parser`]: Upload-format parser, serializer and template
//! - [`index`]: Binary search tree over medicine names
//! - [`resolver`]: First in-stock alternative, in listed order
//! - [`store`]: JSON file, SQLite and in-memory persistence

pub mod index;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use index::{IndexCache, SearchIndex};
pub use models::{
    AlternativeOutcome, AlternativesMap, Inventory, InventorySnapshot, MedicineRecord,
    SearchHit, SearchOutcome, StockStatus,
};
pub use parser::{parse_inventory, parse_with_report, ParseError, TEMPLATE};
pub use resolver::{resolve_alternative, AlternativeResolver, StockLookup};
pub use store::{InventoryStore, JsonFileStore, MemoryStore, SqliteStore, StoreError};

use tracing::{info, warn};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum PharmaFindError {
    #[error("Invalid upload: {0}")]
    Parse(#[from] ParseError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type PharmaFindResult<T> = Result<T, PharmaFindError>;

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    /// Distinct medicines stored
    pub medicines: usize,
    /// Medicines with an alternatives list
    pub with_alternatives: usize,
    /// Malformed lines that were ignored
    pub skipped: Vec<parser::SkippedLine>,
}

// =========================================================================
// Session
// =========================================================================

/// One user session over an injected store.
///
/// Every interaction reloads the snapshot from the store; the search index
/// is rebuilt only when the stored inventory actually changed.
pub struct PharmaFind<S: InventoryStore> {
    store: S,
    cache: IndexCache,
}

impl<S: InventoryStore> PharmaFind<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: IndexCache::new(),
        }
    }

    /// Parse `text` and replace the stored inventory with it.
    ///
    /// An invalid quantity rejects the whole upload and leaves the store
    /// untouched.
    pub fn upload(&mut self, text: &str) -> PharmaFindResult<UploadSummary> {
        let report = parse_with_report(text)?;
        self.store.save(&report.snapshot)?;

        let summary = UploadSummary {
            medicines: report.snapshot.inventory.len(),
            with_alternatives: report.snapshot.alternatives.len(),
            skipped: report.skipped,
        };
        info!(
            medicines = summary.medicines,
            with_alternatives = summary.with_alternatives,
            skipped = summary.skipped.len(),
            "inventory updated"
        );
        Ok(summary)
    }

    /// Clear the stored inventory.
    pub fn reset(&mut self) -> PharmaFindResult<()> {
        self.store.reset()?;
        self.cache.invalidate();
        info!("inventory reset");
        Ok(())
    }

    /// Current snapshot. A store that cannot be read counts as empty.
    pub fn snapshot(&self) -> InventorySnapshot {
        self.store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load inventory, using empty inventory");
            InventorySnapshot::default()
        })
    }

    /// Case-insensitive prefix search with alternative suggestions for
    /// anything out of stock.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::NoInput;
        }

        let snapshot = self.snapshot();
        let index = self.cache.get_or_build(&snapshot.inventory);
        let records = index.prefix_search(query);
        if records.is_empty() {
            return SearchOutcome::NoResults;
        }

        let resolver = AlternativeResolver::new(&snapshot.alternatives, index);
        let hits = records
            .into_iter()
            .map(|record| {
                let status = if record.in_stock() {
                    StockStatus::InStock
                } else {
                    StockStatus::OutOfStock(resolver.resolve(&record.name))
                };
                SearchHit {
                    name: record.name,
                    quantity: record.quantity,
                    status,
                }
            })
            .collect();

        SearchOutcome::Hits(hits)
    }

    /// Exact, case-sensitive stock lookup.
    pub fn lookup(&mut self, name: &str) -> Option<u32> {
        let snapshot = self.snapshot();
        self.cache.get_or_build(&snapshot.inventory).get(name)
    }

    /// Current inventory rendered in the upload format.
    pub fn export(&self) -> String {
        parser::to_upload_text(&self.snapshot())
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of index builds so far.
    pub fn index_builds(&self) -> u64 {
        self.cache.builds()
    }
}
