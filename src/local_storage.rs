//! Browser Local Storage Backend
//!
//! `DocumentStore` over `window.localStorage`. Access is synchronous; a
//! full store surfaces as `QuotaExceeded`.

use wasm_bindgen::{JsCast, JsValue};
use checksheet_core::repository::StorageResult;
use checksheet_core::{DocumentStore, StorageError};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl DocumentStore for LocalStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn write(&self, key: &str, document: &str) -> StorageResult<()> {
        self.storage.set_item(key, document).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded
            } else {
                StorageError::Unavailable(describe(&e))
            }
        })
    }
}

fn is_quota_error(e: &JsValue) -> bool {
    e.dyn_ref::<web_sys::DomException>()
        .map(|ex| ex.name() == "QuotaExceededError")
        .unwrap_or(false)
}

fn describe(e: &JsValue) -> String {
    e.dyn_ref::<web_sys::DomException>()
        .map(|ex| format!("{}: {}", ex.name(), ex.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}
