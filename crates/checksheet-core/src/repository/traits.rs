//! Repository Layer - Core Traits
//!
//! Two seams: `PatternRepository` is what the editor loads from and saves
//! to; `DocumentStore` is the raw key/value backend underneath it (browser
//! local storage, a directory of JSON files, memory).

use crate::domain::Pattern;
use super::error::StorageResult;

/// Persistence port for the whole pattern collection
pub trait PatternRepository {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> StorageResult<Option<Vec<Pattern>>>;

    /// Replace the stored collection with `patterns`
    fn save(&self, patterns: &[Pattern]) -> StorageResult<()>;
}

/// Synchronous string key/value backend
pub trait DocumentStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    fn write(&self, key: &str, document: &str) -> StorageResult<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, document: &str) -> StorageResult<()> {
        (**self).write(key, document)
    }
}
