//! In-memory backend state.

use std::collections::HashMap;
use std::fmt::Debug;

use parking_lot::RwLock;

use crate::types::Document;

/// In-memory store for resource documents and their version counters.
#[derive(Default)]
pub struct MemoryStore {
    pub(super) dataset: RwLock<Dataset>,
}

/// Everything guarded by the store lock. Both maps are always mutated together.
#[derive(Debug, Default)]
pub(super) struct Dataset {
    pub(super) documents: HashMap<String, Document>,
    pub(super) versions: HashMap<String, u64>,
}

impl Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dataset = self.dataset.read();
        f.debug_struct("MemoryStore")
            .field("documents", &dataset.documents.len())
            .field("versions", &dataset.versions.len())
            .finish()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents without going through the async trait.
    pub fn len(&self) -> usize {
        self.dataset.read().documents.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current version counter for `id`, if one exists.
    pub fn current_version(&self, id: &str) -> Option<u64> {
        self.dataset.read().versions.get(id).copied()
    }
}
