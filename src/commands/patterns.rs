//! Pattern Commands
//!
//! Load the pattern book on startup and save it on demand, through the
//! browser local storage repository.

use checksheet_core::{DocumentRepository, EditorConfig, LoadOutcome, PatternBook};

use crate::local_storage::LocalStorage;

/// Book to start the session with: the saved one if it loads, else defaults
pub fn load_patterns(config: EditorConfig) -> PatternBook {
    let mut book = PatternBook::new(config);
    let storage = match LocalStorage::open() {
        Ok(storage) => storage,
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORE] {}; starting with defaults", e).into());
            return book;
        }
    };

    let repo = DocumentRepository::from_config(storage, book.config());
    match book.try_load(&repo) {
        Ok(LoadOutcome::Replaced { dropped }) => {
            web_sys::console::log_1(&format!("[STORE] Loaded {} saved pattern(s)", book.len()).into());
            if dropped > 0 {
                web_sys::console::warn_1(
                    &format!("[STORE] Saved collection over the limit, dropped {} pattern(s)", dropped).into(),
                );
            }
        }
        Ok(LoadOutcome::Kept) => {}
        Err(e) => {
            web_sys::console::error_1(&format!("[STORE] Failed to load saved patterns: {}", e).into());
        }
    }
    book
}

pub fn save_patterns(book: &PatternBook) -> Result<(), String> {
    let storage = LocalStorage::open().map_err(|e| e.to_string())?;
    let repo = DocumentRepository::from_config(storage, book.config());
    book.save(&repo).map_err(|e| e.to_string())
}
