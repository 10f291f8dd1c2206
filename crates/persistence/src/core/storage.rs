//! Core resource store trait.
//!
//! This module defines the [`ResourceStore`] trait, the keyed storage contract
//! that the REST layer builds its create/read/update/delete/search protocol on.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::Document;

/// Keyed storage of one document and one version counter per resource id.
///
/// # Isolation
///
/// Implementations must deep-copy every document that crosses the boundary.
/// `put` stores a copy of its argument and `get`/`list` hand out copies, so no
/// caller ever holds a reference into stored state.
///
/// # Versioning
///
/// The version counter is owned by the store and is independent of the
/// document's embedded `meta.versionId`:
///
/// - [`insert`](ResourceStore::insert) and the first `put` for an id seed
///   its counter to 1;
/// - later `put`s leave the counter alone;
/// - [`next_version`](ResourceStore::next_version) is the only operation that
///   advances it.
///
/// # Concurrency
///
/// Every operation is atomic with respect to the whole dataset. There is no
/// compare-and-swap across calls: two callers that each run `next_version`
/// then `put` for the same id both succeed, and the later `put` wins.
///
/// # Example
///
/// ```ignore
/// use hfs_lite_persistence::core::ResourceStore;
///
/// async fn example<S: ResourceStore>(store: &S, doc: Document) -> StorageResult<()> {
///     store.put("abc", &doc).await?;              // version 1
///     let v = store.next_version("abc").await?;   // 2
///     store.put("abc", &doc).await?;
///     assert!(store.delete("abc").await?);
///     assert!(store.get("abc").await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Returns a human-readable name for this store backend.
    fn backend_name(&self) -> &'static str;

    /// Stores a deep copy of `document` under `id`, replacing any prior value.
    ///
    /// Initializes the version counter for `id` to 1 if none exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`](crate::StorageError) if the document cannot be
    /// copied into the store. Nothing is written in that case.
    async fn put(&self, id: &str, document: &Document) -> StorageResult<()>;

    /// Stores a deep copy of `document` under `id` only if no document is
    /// stored there, seeding the version counter to 1 in the same step.
    ///
    /// Returns `false`, writing nothing, if `id` is already live.
    async fn insert(&self, id: &str, document: &Document) -> StorageResult<bool>;

    /// Returns a deep copy of the document stored under `id`, or `None`.
    async fn get(&self, id: &str) -> StorageResult<Option<Document>>;

    /// Removes the document and version counter for `id` together.
    ///
    /// Returns `true` if anything was removed.
    async fn delete(&self, id: &str) -> StorageResult<bool>;

    /// Returns deep copies of every stored document, in no particular order.
    async fn list(&self) -> StorageResult<Vec<Document>>;

    /// Atomically advances and returns the version counter for `id`.
    ///
    /// An absent counter is first initialized to 1, so the first call after a
    /// create returns 2.
    async fn next_version(&self, id: &str) -> StorageResult<u64>;

    /// Returns the number of stored documents.
    async fn count(&self) -> StorageResult<usize>;
}
