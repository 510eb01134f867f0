//! Gemini implementation of the model-client seam.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateOptions};

use crate::error::{ExtractionError, Result};
use crate::model::ModelClient;
use crate::prompt::ModelPrompt;

/// [`ModelClient`] backed by the Gemini `generateContent` API.
///
/// The prompt's `web_search` flag maps onto Gemini's `google_search`
/// grounding tool.
pub struct GeminiModel {
    client: GeminiClient,
}

impl GeminiModel {
    /// Wrap an already-configured client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Build a client from `GEMINI_API_KEY` (and optional `GEMINI_MODEL`).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Failed`] when the key is not set.
    pub fn from_env() -> Result<Self> {
        let client = GeminiClient::from_env().map_err(|e| ExtractionError::failed(e))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl ModelClient for GeminiModel {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String> {
        let options = GenerateOptions {
            web_search: prompt.web_search,
        };

        self.client
            .generate_content(&prompt.text, &options)
            .await
            .map_err(|e| ExtractionError::failed(e))
    }
}
