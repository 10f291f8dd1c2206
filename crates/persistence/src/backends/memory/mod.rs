//! In-memory backend implementation.
//!
//! This module provides a process-lifetime implementation of
//! [`ResourceStore`](crate::core::ResourceStore). Nothing survives a restart.
//!
//! # Layout
//!
//! The dataset is two maps behind one `parking_lot::RwLock`:
//!
//! ```text
//! documents: id -> Document   (deep copies only)
//! versions:  id -> u64        (authoritative version counter)
//! ```
//!
//! Reads (`get`, `list`, `count`) share the lock. Writes (`insert`, `put`,
//! `delete`, `next_version`) take it exclusively, which keeps both maps consistent: a
//! delete removes the document and its counter in one critical section.
//! There is no per-key locking, so operations on unrelated ids still contend.
//!
//! # Example
//!
//! ```
//! use hfs_lite_persistence::backends::memory::MemoryStore;
//!
//! let store = MemoryStore::new();
//! assert!(store.is_empty());
//! ```

mod backend;
mod storage;

pub use backend::MemoryStore;
