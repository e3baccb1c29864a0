//! Storage errors

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backend missing or refused access (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize patterns: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse document under {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
