//! Testing utilities including a mock model client.
//!
//! Useful for testing applications that use the extraction pipeline without
//! making real model or network calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ExtractionError, Result};
use crate::model::ModelClient;
use crate::prompt::ModelPrompt;

/// A mock [`ModelClient`] returning queued canned replies.
///
/// Replies are consumed front to back; once the queue is empty the mock
/// answers with an empty JSON array. Every prompt it receives is recorded
/// for assertions.
#[derive(Default, Clone)]
pub struct MockModel {
    replies: Arc<Mutex<VecDeque<CannedReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

enum CannedReply {
    Text(String),
    Error(String),
}

/// Record of one prompt the mock received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Full instruction text.
    pub prompt: String,

    /// Whether web search was requested.
    pub web_search: bool,
}

impl MockModel {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(CannedReply::Text(reply.into()));
        self
    }

    /// Queue a provider failure.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(CannedReply::Error(message.into()));
        self
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of prompts received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for MockModel {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.text.clone(),
            web_search: prompt.web_search,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(CannedReply::Text(text)) => Ok(text),
            Some(CannedReply::Error(message)) => Err(ExtractionError::failed(message)),
            None => Ok("[]".to_string()),
        }
    }
}
