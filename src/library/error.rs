//! Error types exposed by the prompt library layer.

use thiserror::Error;

use crate::feedback::FeedbackError;

/// Errors surfaced while talking to the prompt backend or running the CLI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LibraryError {
    /// The backend did not confirm deletion of a record.
    #[error("failed to delete record {id}: {message}")]
    DeleteFailed {
        /// Identifier of the record the delete targeted.
        id: u64,
        /// Status or body detail returned with the failure.
        message: String,
    },

    /// The backend returned a non-success status for a non-delete call.
    #[error("prompt API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the prompt API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Feedback failed local validation before it was posted.
    #[error(transparent)]
    InvalidFeedback(#[from] FeedbackError),

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl LibraryError {
    /// Returns true when the error reports a rejected delete.
    #[must_use]
    pub const fn is_delete_failure(&self) -> bool {
        matches!(self, Self::DeleteFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::LibraryError;

    #[test]
    fn delete_failed_message_names_the_record() {
        let error = LibraryError::DeleteFailed {
            id: 5,
            message: "500 Internal Server Error".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "failed to delete record 5: 500 Internal Server Error"
        );
        assert!(error.is_delete_failure());
    }

    #[test]
    fn transport_errors_are_not_delete_failures() {
        let error = LibraryError::Network {
            message: "connection refused".to_owned(),
        };

        assert!(!error.is_delete_failure());
    }
}
