//! Extraction pipeline - build the prompt, await one model call, normalize.

use tracing::debug;

use crate::error::Result;
use crate::model::ModelClient;
use crate::normalize;
use crate::prompt;
use crate::types::{BusinessInfo, ExtractionRequest};

/// Runs extractions against a model client.
///
/// Holds no state between calls; the accumulated result list lives in
/// [`crate::Session`], owned by the caller.
pub struct Extractor<M> {
    model: M,
}

impl<M: ModelClient> Extractor<M> {
    /// Create an extractor over the given model client.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Access the underlying model client.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run one extraction end to end.
    ///
    /// Validates the request, sends a single prompt, and normalizes the
    /// reply. A failed call contributes nothing; there are no partial
    /// results.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ExtractionError`] unchanged: `InvalidInput`
    /// before any model call, `MalformedResponse`/`UnexpectedShape` from
    /// the normalizer, `Failed` for provider or transport errors.
    pub async fn extract(&self, request: &ExtractionRequest) -> Result<Vec<BusinessInfo>> {
        let prompt = prompt::build_prompt(request)?;
        debug!(web_search = prompt.web_search, "sending extraction prompt");

        let reply = self.model.generate(&prompt).await?;
        let records = normalize::normalize_reply(&reply)?;

        debug!(count = records.len(), "normalized model reply");
        Ok(records)
    }
}
