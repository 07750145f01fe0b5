//! End-to-end session flows over the persistent stores.

use std::fs;

use pharmafind_core::{
    AlternativeOutcome, InventoryStore, JsonFileStore, PharmaFind, SearchOutcome, SqliteStore,
    StockStatus, TEMPLATE,
};

fn status_of<'a>(outcome: &'a SearchOutcome, name: &str) -> &'a StockStatus {
    &outcome
        .hits()
        .iter()
        .find(|h| h.name == name)
        .unwrap_or_else(|| panic!("{} not in results", name))
        .status
}

#[test]
fn test_template_search_over_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = PharmaFind::new(JsonFileStore::new(dir.path().join("inventory.json")));
    app.upload(TEMPLATE).unwrap();

    // Cetirizine is in stock, so no suggestion is computed for it
    let outcome = app.search("ce");
    assert_eq!(status_of(&outcome, "Cetirizine"), &StockStatus::InStock);

    let outcome = app.search("aspirin");
    assert_eq!(
        status_of(&outcome, "Aspirin"),
        &StockStatus::OutOfStock(AlternativeOutcome::AlternativesExhausted)
    );

    let outcome = app.search("CROCIN");
    assert_eq!(
        status_of(&outcome, "Crocin"),
        &StockStatus::OutOfStock(AlternativeOutcome::NoAlternativesListed)
    );

    let outcome = app.search("L");
    let names: Vec<_> = outcome.hits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Levocetirizine", "Loratadine"]);
}

#[test]
fn test_new_session_sees_persisted_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    PharmaFind::new(JsonFileStore::new(&path))
        .upload("Dolo:3\nParacetamol:0 [Crocin Dolo]")
        .unwrap();

    let mut app = PharmaFind::new(JsonFileStore::new(&path));
    let outcome = app.search("par");
    assert_eq!(
        status_of(&outcome, "Paracetamol"),
        &StockStatus::OutOfStock(AlternativeOutcome::Suggestion {
            name: "Dolo".into(),
            quantity: 3,
        })
    );
}

#[test]
fn test_corrupt_store_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "][ definitely not json").unwrap();

    let mut app = PharmaFind::new(JsonFileStore::new(&path));
    assert!(app.snapshot().is_empty());
    assert_eq!(app.search("d"), SearchOutcome::NoResults);

    // A fresh upload recovers the store
    app.upload("Dolo:3").unwrap();
    assert_eq!(app.lookup("Dolo"), Some(3));
}

#[test]
fn test_reset_clears_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let mut app = PharmaFind::new(JsonFileStore::new(&path));
    app.upload(TEMPLATE).unwrap();
    app.reset().unwrap();

    let loaded = JsonFileStore::new(&path).load().unwrap();
    assert!(loaded.inventory.is_empty());
    assert!(loaded.alternatives.is_empty());
}

#[test]
fn test_sqlite_store_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.db");

    {
        let mut app = PharmaFind::new(SqliteStore::open(&path).unwrap());
        app.upload(TEMPLATE).unwrap();
        assert!(app.store().last_saved_at().unwrap().is_some());
    }

    let mut app = PharmaFind::new(SqliteStore::open(&path).unwrap());
    assert_eq!(app.lookup("Loratadine"), Some(2));
    assert_eq!(app.export(), {
        let mut lines: Vec<_> = TEMPLATE.lines().collect();
        lines.sort();
        lines.join("\n") + "\n"
    });

    app.reset().unwrap();
    assert!(app.snapshot().is_empty());
}

#[test]
fn test_boxed_store() {
    let store: Box<dyn InventoryStore> = Box::new(SqliteStore::open_in_memory().unwrap());
    let mut app = PharmaFind::new(store);
    app.upload("Dolo:3").unwrap();
    assert_eq!(app.lookup("Dolo"), Some(3));
}
