//! Check Sheet Core
//!
//! Layered the same way on both targets (native tests and the WASM front end):
//! - domain: check items, patterns, normal values and the derivation rules
//! - editor: the in-memory pattern store the settings page mutates
//! - repository: persistence port plus memory / JSON-file / legacy support
//! - config: editor limits and storage keys

pub mod config;
pub mod domain;
pub mod editor;
pub mod repository;

pub use config::EditorConfig;
pub use domain::{
    CheckItem, DomainError, DomainResult, Entity, ItemId, NormalValue, Pattern, PatternId,
    ResponseType,
};
pub use editor::{LoadOutcome, PatternBook};
pub use repository::{DocumentRepository, DocumentStore, PatternRepository, StorageError};
