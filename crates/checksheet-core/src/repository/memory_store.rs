//! In-memory document store
//!
//! Behaves like browser local storage, including an optional byte quota so
//! save failures can be exercised without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use super::error::{StorageError, StorageResult};
use super::traits::DocumentStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes whose key + document exceed `bytes` fail with `QuotaExceeded`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            documents: RefCell::default(),
            quota_bytes: Some(bytes),
        }
    }

    /// Seed a raw document (e.g. a legacy or corrupt payload)
    pub fn insert(&self, key: &str, document: &str) {
        self.documents.borrow_mut().insert(key.to_string(), document.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, document: &str) -> StorageResult<()> {
        if let Some(quota) = self.quota_bytes {
            let others: usize = self.documents
                .borrow()
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + document.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        self.insert(key, document);
        Ok(())
    }
}
