//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` endpoint with no
//! domain-specific logic. Supports plain text generation plus the
//! `google_search` grounding tool.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateOptions};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let reply = client
//!     .generate_content("Say hello", &GenerateOptions::default())
//!     .await?;
//!
//! // With web search grounding
//! let grounded = client
//!     .generate_content("Find the cafe's phone number", &GenerateOptions { web_search: true })
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::debug;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variables `GEMINI_API_KEY` and, when set,
    /// `GEMINI_MODEL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        let mut client = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            client = client.with_model(model);
        }
        Ok(client)
    }

    /// Set the model (default: `gemini-2.5-flash`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a text completion for a single prompt.
    ///
    /// Returns the concatenated text parts of the first candidate.
    ///
    /// # Errors
    ///
    /// [`GeminiError::Http`] on transport failure, [`GeminiError::Api`] on a
    /// non-success status, [`GeminiError::Empty`] when the reply carries no
    /// usable text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt, options);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(
            model = %self.model,
            web_search = options.web_search,
            "calling generateContent"
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(GeminiError::Empty)
    }
}
