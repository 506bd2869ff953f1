//! Error types for the import system

use thiserror::Error;

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors that can occur during import operations
///
/// The set is deliberately closed so callers can distinguish retryable
/// transport faults from fatal precondition or translation failures.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A required parent folder mapping is absent from the job store.
    /// Indicates an ordering bug upstream or corrupted job state; the
    /// orchestrator never invents a parent.
    #[error("No folder mapping found for source id: {0}")]
    MissingParentMapping(String),

    /// Destination storage call failed (network, auth, quota, validation)
    #[error("Storage request failed: {0}")]
    Storage(String),

    /// Job store read or write failed
    #[error("Job store error: {0}")]
    Store(String),

    /// Malformed modification timestamp on a document
    #[error("Invalid modification timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Cached content could not be opened or read
    #[error("Content not readable for reference '{reference}': {reason}")]
    ContentUnavailable { reference: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImportError {
    /// Whether an enclosing retry layer may re-invoke the failed import call.
    ///
    /// Transport and store faults are transient; mapping, translation and
    /// content failures reflect bad job state and will fail again unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ImportError::Storage(_) | ImportError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(ImportError::Storage("timeout".to_string()).is_retryable());
        assert!(ImportError::Store("connection reset".to_string()).is_retryable());
    }

    #[test]
    fn test_state_errors_are_fatal() {
        assert!(!ImportError::MissingParentMapping("f1".to_string()).is_retryable());
        assert!(!ImportError::InvalidTimestamp {
            value: "yesterday".to_string(),
            reason: "not RFC 3339".to_string(),
        }
        .is_retryable());
        assert!(!ImportError::ContentUnavailable {
            reference: "blob-1".to_string(),
            reason: "missing".to_string(),
        }
        .is_retryable());
    }

    #[test]
    fn test_missing_mapping_names_source_id() {
        let err = ImportError::MissingParentMapping("folder-42".to_string());
        assert!(err.to_string().contains("folder-42"));
    }
}
