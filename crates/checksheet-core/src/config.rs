//! Editor Configuration
//!
//! Limits and storage keys shared by the store and the storage adapters.

use serde::{Deserialize, Serialize};

/// Key the settings page saves under
pub const STORAGE_KEY: &str = "heatstroke-check-master-patterns";

/// Key used by the earlier editor prototype (optional-field schema)
pub const LEGACY_STORAGE_KEY: &str = "heatstroke-check-patterns";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hard cap on the number of patterns
    pub max_patterns: usize,
    /// Blank items a new pattern starts with
    pub initial_item_count: usize,
    pub storage_key: String,
    /// Read (never written) when `storage_key` holds nothing
    pub legacy_storage_key: Option<String>,
    /// How long a transient notice stays on screen
    pub notice_timeout_ms: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_patterns: 5,
            initial_item_count: 10,
            storage_key: STORAGE_KEY.to_string(),
            legacy_storage_key: Some(LEGACY_STORAGE_KEY.to_string()),
            notice_timeout_ms: 3000,
        }
    }
}
