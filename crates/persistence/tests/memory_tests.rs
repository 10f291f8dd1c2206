//! Memory store integration tests.
//!
//! These tests drive [`MemoryStore`] through `Arc<dyn ResourceStore>`, the way
//! the REST layer holds it.

use std::sync::Arc;

use serde_json::{Value, json};

use hfs_lite_persistence::types::{document_id, document_version_id};
use hfs_lite_persistence::{Document, MemoryStore, ResourceStore};

fn create_store() -> Arc<dyn ResourceStore> {
    Arc::new(MemoryStore::new())
}

fn create_patient(id: &str, version: &str) -> Document {
    match json!({
        "resourceType": "Patient",
        "id": id,
        "meta": {"versionId": version},
        "name": [{"family": "Smith"}]
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_update_delete_lifecycle() {
    let store = create_store();

    store.put("p1", &create_patient("p1", "1")).await.unwrap();
    let version = store.next_version("p1").await.unwrap();
    assert_eq!(version, 2);

    store
        .put("p1", &create_patient("p1", &version.to_string()))
        .await
        .unwrap();
    let stored = store.get("p1").await.unwrap().unwrap();
    assert_eq!(document_id(&stored), Some("p1"));
    assert_eq!(document_version_id(&stored), Some("2"));

    assert!(store.delete("p1").await.unwrap());
    assert!(store.get("p1").await.unwrap().is_none());
    assert!(!store.delete("p1").await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_put_after_delete_restarts_counter() {
    let store = create_store();

    store.put("p1", &create_patient("p1", "1")).await.unwrap();
    store.next_version("p1").await.unwrap();
    store.next_version("p1").await.unwrap();
    store.delete("p1").await.unwrap();

    store.put("p1", &create_patient("p1", "1")).await.unwrap();
    assert_eq!(store.next_version("p1").await.unwrap(), 2);
}

#[tokio::test]
async fn test_embedded_version_does_not_drive_counter() {
    let store = create_store();

    store.put("p1", &create_patient("p1", "99")).await.unwrap();

    assert_eq!(store.next_version("p1").await.unwrap(), 2);
}

#[tokio::test]
async fn test_list_returns_every_document() {
    let store = create_store();
    for id in ["a", "b", "c"] {
        store.put(id, &create_patient(id, "1")).await.unwrap();
    }

    let mut ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .iter()
        .filter_map(|doc| document_id(doc).map(str::to_string))
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(store.count().await.unwrap(), 3);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_on_distinct_ids() {
    let store = create_store();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let id = format!("p{}", i);
                store.put(&id, &create_patient(&id, "1")).await.unwrap();
                store.next_version(&id).await.unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }
    assert_eq!(store.count().await.unwrap(), 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_version_allocation_is_unique() {
    let store = create_store();
    store.put("p1", &create_patient("p1", "1")).await.unwrap();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.next_version("p1").await.unwrap() })
        })
        .collect();

    let mut versions = Vec::new();
    for handle in handles {
        versions.push(handle.await.unwrap());
    }
    versions.sort_unstable();

    assert_eq!(versions, (2..=51).collect::<Vec<u64>>());
}
