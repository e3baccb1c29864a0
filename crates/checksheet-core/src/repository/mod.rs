//! Repository Layer
//!
//! Persistence port and its backends.

mod traits;
mod error;
mod document_repo;
mod memory_store;
mod file_store;
pub mod legacy;

#[cfg(test)]
mod tests;

pub use traits::{DocumentStore, PatternRepository};
pub use error::{StorageError, StorageResult};
pub use document_repo::DocumentRepository;
pub use memory_store::MemoryStore;
pub use file_store::JsonFileStore;
