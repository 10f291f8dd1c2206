//! Store backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`memory`] | Process-lifetime store behind a single reader/writer lock |
//!
//! # Example
//!
//! ```
//! use hfs_lite_persistence::backends::memory::MemoryStore;
//! use hfs_lite_persistence::ResourceStore;
//!
//! let store = MemoryStore::new();
//! assert_eq!(store.backend_name(), "memory");
//! ```

pub mod memory;
