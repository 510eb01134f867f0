//! Model-client seam between the pipeline and LLM providers.

use async_trait::async_trait;

use crate::error::Result;
use crate::prompt::ModelPrompt;

/// A generative-model backend capable of answering one prompt.
///
/// Implementations wrap specific providers (Gemini, OpenAI, ...) and are
/// responsible for honoring the prompt's `web_search` capability flag and
/// for mapping transport or provider failures into
/// [`crate::ExtractionError::Failed`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the raw text reply.
    ///
    /// One awaited call, run to completion or failure: no retry, no
    /// cancellation, no timeout beyond whatever the transport enforces.
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String>;
}
