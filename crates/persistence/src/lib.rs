//! Helios Lite Persistence Layer
//!
//! This crate provides the versioned resource store behind the Helios lite FHIR
//! server. A store holds exactly one current document and one version counter per
//! resource id, for a single resource type, for the lifetime of the process.
//!
//! # Guarantees
//!
//! - **Isolation**: every document crossing the store boundary, in either direction,
//!   is an independent deep copy. Mutating a document after handing it to
//!   [`ResourceStore::put`], or mutating one returned by [`ResourceStore::get`],
//!   never changes stored state.
//! - **Versioning**: the version counter is tracked separately from the document's
//!   embedded `meta.versionId`, so a caller-supplied document can never corrupt it.
//! - **Atomicity**: documents and counters live under one reader/writer lock, so a
//!   delete removes both together and concurrent readers never observe half a write.
//!
//! # Architecture
//!
//! - [`types`] - The [`Document`] type and helpers for its interpreted fields
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`ResourceStore`] trait
//! - [`backends`] - Store implementations ([`MemoryStore`])
//!
//! # Quick Start
//!
//! ```
//! use hfs_lite_persistence::{MemoryStore, ResourceStore};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryStore::new();
//!
//! let patient = json!({"resourceType": "Patient", "id": "abc"});
//! let document = patient.as_object().unwrap().clone();
//!
//! store.put("abc", &document).await.unwrap();
//! assert_eq!(store.next_version("abc").await.unwrap(), 2);
//!
//! let read = store.get("abc").await.unwrap().unwrap();
//! assert_eq!(read["id"], "abc");
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use backends::memory::MemoryStore;
pub use core::ResourceStore;
pub use error::{StorageError, StorageResult};
pub use types::Document;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
