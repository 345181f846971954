use rbfs_types::TextError;

/// Failures raised by a [`Store`](crate::store::Store) implementation.
///
/// These carry driver detail and are meant for logs. They never reach HTTP clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to encode column {column}: {reason}")]
    Encode {
        column: &'static str,
        reason: String,
    },
    #[error("failed to decode column {column}: {reason}")]
    Decode {
        column: &'static str,
        reason: String,
    },
    #[error("failed to map record: {0}")]
    Record(serde_json::Error),
    #[error("store is closed")]
    Closed,
}

/// Outcome classification of a repository operation.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// A required field is missing or a business rule rejected the input.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The targeted identifier does not name a stored row.
    #[error("record not found")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

pub type ResourceResult<T> = std::result::Result<T, ResourceError>;

/// Problems with startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} cannot be empty")]
    Empty {
        key: &'static str,
        #[source]
        source: TextError,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
