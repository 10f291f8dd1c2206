//! Core store traits and abstractions.
//!
//! - [`ResourceStore`] - Keyed document storage with per-id version counters
//!
//! # Example: Implementing a Store Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use hfs_lite_persistence::core::ResourceStore;
//! use hfs_lite_persistence::error::StorageResult;
//! use hfs_lite_persistence::types::Document;
//!
//! struct MyStore {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl ResourceStore for MyStore {
//!     fn backend_name(&self) -> &'static str {
//!         "my-store"
//!     }
//!
//!     async fn put(&self, id: &str, document: &Document) -> StorageResult<()> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod storage;

pub use storage::ResourceStore;
