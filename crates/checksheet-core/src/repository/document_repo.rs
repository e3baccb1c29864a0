//! Document Repository
//!
//! `PatternRepository` over any `DocumentStore`: the collection is one JSON
//! array under a fixed key, with a read-only fallback to the legacy key.

use crate::config::EditorConfig;
use crate::domain::Pattern;
use super::error::{StorageError, StorageResult};
use super::legacy::{self, LegacyPattern};
use super::traits::{DocumentStore, PatternRepository};

pub struct DocumentRepository<S> {
    store: S,
    key: String,
    legacy_key: Option<String>,
}

impl<S: DocumentStore> DocumentRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            legacy_key: None,
        }
    }

    /// Keys taken from the editor config
    pub fn from_config(store: S, config: &EditorConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            legacy_key: config.legacy_storage_key.clone(),
        }
    }

    pub fn with_legacy_key(mut self, key: impl Into<String>) -> Self {
        self.legacy_key = Some(key.into());
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_legacy(&self) -> StorageResult<Option<Vec<Pattern>>> {
        let Some(legacy_key) = &self.legacy_key else {
            return Ok(None);
        };
        let Some(document) = self.store.read(legacy_key)? else {
            return Ok(None);
        };
        let parsed: Vec<LegacyPattern> = serde_json::from_str(&document).map_err(|source| {
            StorageError::Parse { key: legacy_key.clone(), source }
        })?;
        log::info!("migrating {} legacy pattern(s) from {}", parsed.len(), legacy_key);
        Ok(Some(legacy::migrate(parsed)))
    }
}

impl<S: DocumentStore> PatternRepository for DocumentRepository<S> {
    fn load(&self) -> StorageResult<Option<Vec<Pattern>>> {
        match self.store.read(&self.key)? {
            Some(document) => serde_json::from_str(&document)
                .map(Some)
                .map_err(|source| StorageError::Parse { key: self.key.clone(), source }),
            None => self.load_legacy(),
        }
    }

    fn save(&self, patterns: &[Pattern]) -> StorageResult<()> {
        let document = serde_json::to_string(patterns).map_err(StorageError::Serialize)?;
        self.store.write(&self.key, &document)?;
        log::debug!("saved {} pattern(s) to {} ({} bytes)", patterns.len(), self.key, document.len());
        Ok(())
    }
}
