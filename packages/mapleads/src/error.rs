//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. All four kinds propagate
//! unchanged to the UI layer; none of them is retried.

use thiserror::Error;

/// Errors that can occur during an extraction call.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// User input failed local validation; the model is never called.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The model reply was not parseable JSON after fence-stripping.
    #[error("the AI's response could not be parsed as JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The parsed reply did not match the array-of-businesses contract.
    #[error("the AI's response was not in the expected format: an array of businesses")]
    UnexpectedShape,

    /// Transport or provider failure, or any other wrapped error.
    #[error("extraction failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ExtractionError {
    /// Build an [`ExtractionError::InvalidInput`] from a reason message.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wrap any error as the catch-all [`ExtractionError::Failed`].
    pub fn failed(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failed(source.into())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
