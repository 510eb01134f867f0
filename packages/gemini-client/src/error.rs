//! Typed errors for the Gemini client.

use thiserror::Error;

/// Errors returned by [`crate::GeminiClient`].
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The reply carried no candidates or no text parts.
    #[error("Gemini returned no usable text")]
    Empty,

    /// Client configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, GeminiError>;
