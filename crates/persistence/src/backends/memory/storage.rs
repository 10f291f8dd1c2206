//! ResourceStore implementation for the in-memory backend.

use async_trait::async_trait;
use tracing::trace;

use crate::core::ResourceStore;
use crate::error::StorageResult;
use crate::types::Document;

use super::MemoryStore;

#[async_trait]
impl ResourceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, id: &str, document: &Document) -> StorageResult<()> {
        // Copy before taking the lock so the critical section stays short.
        let copy = document.clone();

        let mut dataset = self.dataset.write();
        dataset.documents.insert(id.to_string(), copy);
        dataset.versions.entry(id.to_string()).or_insert(1);

        trace!(id = %id, "Stored document");
        Ok(())
    }

    async fn insert(&self, id: &str, document: &Document) -> StorageResult<bool> {
        let copy = document.clone();

        let mut dataset = self.dataset.write();
        if dataset.documents.contains_key(id) {
            return Ok(false);
        }
        dataset.documents.insert(id.to_string(), copy);
        dataset.versions.insert(id.to_string(), 1);

        trace!(id = %id, "Inserted document");
        Ok(true)
    }

    async fn get(&self, id: &str) -> StorageResult<Option<Document>> {
        let dataset = self.dataset.read();
        Ok(dataset.documents.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut dataset = self.dataset.write();
        if dataset.documents.remove(id).is_none() {
            return Ok(false);
        }
        dataset.versions.remove(id);

        trace!(id = %id, "Deleted document and version counter");
        Ok(true)
    }

    async fn list(&self) -> StorageResult<Vec<Document>> {
        let dataset = self.dataset.read();
        Ok(dataset.documents.values().cloned().collect())
    }

    async fn next_version(&self, id: &str) -> StorageResult<u64> {
        let mut dataset = self.dataset.write();
        let counter = dataset.versions.entry(id.to_string()).or_insert(1);
        *counter += 1;
        Ok(*counter)
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.dataset.read().documents.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn patient(id: &str) -> Document {
        doc(json!({"resourceType": "Patient", "id": id}))
    }

    #[tokio::test]
    async fn test_put_get_delete_list() {
        let store = MemoryStore::new();

        store.put("abc", &patient("abc")).await.unwrap();

        let got = store.get("abc").await.unwrap().expect("document stored");
        assert_eq!(got["id"], "abc");

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);

        assert!(store.delete("abc").await.unwrap());
        assert!(store.get("abc").await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.delete("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_first_put_seeds_version_one() {
        let store = MemoryStore::new();
        store.put("abc", &patient("abc")).await.unwrap();
        assert_eq!(store.current_version("abc"), Some(1));

        // A second put does not touch the counter.
        store.put("abc", &patient("abc")).await.unwrap();
        assert_eq!(store.current_version("abc"), Some(1));
    }

    #[tokio::test]
    async fn test_insert_refuses_live_id() {
        let store = MemoryStore::new();
        assert!(store.insert("abc", &patient("abc")).await.unwrap());
        store.next_version("abc").await.unwrap();

        let mut replacement = patient("abc");
        replacement.insert("active".to_string(), json!(true));
        assert!(!store.insert("abc", &replacement).await.unwrap());

        let stored = store.get("abc").await.unwrap().unwrap();
        assert!(stored.get("active").is_none());
        assert_eq!(store.current_version("abc"), Some(2));
    }

    #[tokio::test]
    async fn test_insert_after_delete_seeds_version_one() {
        let store = MemoryStore::new();
        store.insert("abc", &patient("abc")).await.unwrap();
        store.next_version("abc").await.unwrap();
        store.delete("abc").await.unwrap();

        assert!(store.insert("abc", &patient("abc")).await.unwrap());
        assert_eq!(store.current_version("abc"), Some(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_admit_one_writer() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert("abc", &patient("abc")).await.unwrap() })
            })
            .collect();

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);
    }

    #[tokio::test]
    async fn test_next_version_after_create_is_two() {
        let store = MemoryStore::new();
        store.put("abc", &patient("abc")).await.unwrap();

        assert_eq!(store.next_version("abc").await.unwrap(), 2);
        assert_eq!(store.next_version("abc").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_next_version_on_absent_id_starts_at_two() {
        let store = MemoryStore::new();
        assert_eq!(store.next_version("fresh").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_resets_version_counter() {
        let store = MemoryStore::new();
        store.put("abc", &patient("abc")).await.unwrap();
        store.next_version("abc").await.unwrap();

        assert!(store.delete("abc").await.unwrap());
        assert_eq!(store.current_version("abc"), None);

        store.put("abc", &patient("abc")).await.unwrap();
        assert_eq!(store.current_version("abc"), Some(1));
    }

    #[tokio::test]
    async fn test_put_isolates_caller_document() {
        let store = MemoryStore::new();
        let mut document = patient("abc");
        store.put("abc", &document).await.unwrap();

        document.insert("active".to_string(), json!(true));

        let stored = store.get("abc").await.unwrap().unwrap();
        assert!(stored.get("active").is_none());
    }

    #[tokio::test]
    async fn test_get_and_list_return_independent_copies() {
        let store = MemoryStore::new();
        store
            .put("abc", &doc(json!({"id": "abc", "name": [{"family": "Doe"}]})))
            .await
            .unwrap();

        let mut read = store.get("abc").await.unwrap().unwrap();
        read["name"][0]["family"] = json!("Changed");

        let mut listed = store.list().await.unwrap();
        listed[0].insert("extra".to_string(), json!(1));

        let fresh = store.get("abc").await.unwrap().unwrap();
        assert_eq!(fresh["name"][0]["family"], "Doe");
        assert!(fresh.get("extra").is_none());
    }

    #[tokio::test]
    async fn test_count() {
        let store = MemoryStore::new();
        store.put("a", &patient("a")).await.unwrap();
        store.put("b", &patient("b")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_next_version_never_repeats() {
        let store = Arc::new(MemoryStore::new());
        store.put("abc", &patient("abc")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(
                async move { store.next_version("abc").await.unwrap() },
            ));
        }

        let mut versions = Vec::new();
        for handle in handles {
            versions.push(handle.await.unwrap());
        }
        versions.sort_unstable();

        let expected: Vec<u64> = (2..34).collect();
        assert_eq!(versions, expected);
    }
}
