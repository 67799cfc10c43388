//! In-memory document store
//!
//! Exercises store-backed resolution without a network. Entries are
//! registered with builder-style methods; identifiers can also be
//! marked as access-denied to test that failure path.

use std::collections::{BTreeMap, BTreeSet};

use texdraft_core::store::{DocumentStore, NamedFile, StoreEntry, StoreError};

/// In-memory `DocumentStore` backed by a map of identifiers to entries
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, StoreEntry>,
    denied: BTreeSet<String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-document identifier
    pub fn with_file(mut self, id: impl Into<String>, name: &str, content: &[u8]) -> Self {
        self.entries.insert(
            id.into(),
            StoreEntry::File(NamedFile::new(name, content.to_vec())),
        );
        self
    }

    /// Register a folder identifier with its immediate child files
    pub fn with_folder(mut self, id: impl Into<String>, files: &[(&str, &[u8])]) -> Self {
        let entries = files
            .iter()
            .map(|(name, content)| NamedFile::new(*name, content.to_vec()))
            .collect();
        self.entries.insert(id.into(), StoreEntry::Folder(entries));
        self
    }

    /// Mark an identifier as access-denied
    pub fn deny(mut self, id: impl Into<String>) -> Self {
        self.denied.insert(id.into());
        self
    }
}

impl DocumentStore for MemoryStore {
    fn fetch(&self, id: &str) -> Result<StoreEntry, StoreError> {
        if self.denied.contains(id) {
            return Err(StoreError::AccessDenied { id: id.to_string() });
        }

        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}
