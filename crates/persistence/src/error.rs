//! Error types for the persistence layer.
//!
//! Absence of a resource is not an error: lookups return `Option` and deletes
//! return `bool`. The variants here model genuine storage faults, which callers
//! must surface as internal errors rather than as "not found".

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A document could not be copied across the store boundary.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("{backend_name} backend error: {message}")]
    Backend {
        backend_name: String,
        message: String,
    },
}

impl StorageError {
    /// Creates a backend error for the named backend.
    pub fn backend(backend_name: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::Backend {
            backend_name: backend_name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = StorageError::backend("memory", "dataset unavailable");
        assert_eq!(err.to_string(), "memory backend error: dataset unavailable");
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(matches!(err, StorageError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }
}
