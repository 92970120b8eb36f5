//! Integration tests for filekv
//!
//! Runs the same behavioral checks against the in-memory and the file-backed
//! store through the `KvStore` trait, then checks durability across
//! instances.

use filekv::{Config, KvStore, MappingStore, OpenMode, PersistentStore};
use tempfile::TempDir;

// =============================================================================
// Shared Scenario
// =============================================================================

fn run_scenario<S: KvStore<String, i64>>(store: &mut S) {
    let a = "a".to_string();
    let b = "b".to_string();

    assert!(store.set(10, a.clone()).unwrap());
    assert_eq!(store.get(&a).unwrap(), Some(10));

    assert!(store.set(20, a.clone()).unwrap());
    assert_eq!(store.get(&a).unwrap(), Some(20));

    assert_eq!(store.get(&b).unwrap(), None);

    assert_eq!(store.delete(&a).unwrap(), Some(20));
    assert_eq!(store.get(&a).unwrap(), None);

    assert_eq!(store.delete(&b).unwrap(), None);
}

#[test]
fn test_scenario_in_memory() {
    let mut store: MappingStore<String, i64> = MappingStore::new();
    run_scenario(&mut store);
}

#[test]
fn test_scenario_persistent() {
    let temp = TempDir::new().unwrap();
    let mut store: PersistentStore<String, i64> =
        PersistentStore::open_path(temp.path().join("database.db")).unwrap();
    run_scenario(&mut store);
}

// =============================================================================
// Durability Tests
// =============================================================================

#[test]
fn test_values_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("database.db");

    {
        let mut store: PersistentStore<String, i64> = PersistentStore::open_path(&path).unwrap();
        for i in 0..100 {
            store.set(i * i, format!("key{:03}", i)).unwrap();
        }
        store.delete("key050").unwrap();
    }

    let mut reopened: PersistentStore<String, i64> = PersistentStore::open_path(&path).unwrap();

    assert_eq!(reopened.len().unwrap(), 99);
    assert_eq!(reopened.get("key007").unwrap(), Some(49));
    assert_eq!(reopened.get("key099").unwrap(), Some(99 * 99));
    assert_eq!(reopened.get("key050").unwrap(), None);
}

#[test]
fn test_truncating_reopen_discards_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("database.db");

    {
        let mut store: PersistentStore<String, i64> = PersistentStore::open_path(&path).unwrap();
        store.set(10, "a".to_string()).unwrap();
    }

    let config = Config::builder()
        .path(&path)
        .open_mode(OpenMode::Truncate)
        .build();
    let mut reopened: PersistentStore<String, i64> = PersistentStore::open(config).unwrap();

    assert_eq!(reopened.get("a").unwrap(), None);
}

#[test]
fn test_independent_paths_do_not_interfere() {
    let temp = TempDir::new().unwrap();
    let mut left: PersistentStore<String, String> =
        PersistentStore::open_path(temp.path().join("left.db")).unwrap();
    let mut right: PersistentStore<String, String> =
        PersistentStore::open_path(temp.path().join("right.db")).unwrap();

    left.set("L".to_string(), "k".to_string()).unwrap();
    right.set("R".to_string(), "k".to_string()).unwrap();

    assert_eq!(left.get("k").unwrap(), Some("L".to_string()));
    assert_eq!(right.get("k").unwrap(), Some("R".to_string()));
}

#[test]
fn test_structured_values_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("structured.db");
    let value = vec![Some(1.5f64), None, Some(-2.0)];

    {
        let mut store: PersistentStore<u32, Vec<Option<f64>>> =
            PersistentStore::open_path(&path).unwrap();
        store.set(value.clone(), 7).unwrap();
    }

    let mut reopened: PersistentStore<u32, Vec<Option<f64>>> =
        PersistentStore::open_path(&path).unwrap();
    assert_eq!(reopened.get(&7u32).unwrap(), Some(value));
}
