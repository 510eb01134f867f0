//! Request and response types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Attach the `google_search` grounding tool to the request.
    pub web_search: bool,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from one user prompt.
    pub fn from_prompt(prompt: &str, options: &GenerateOptions) -> Self {
        let tools = if options.web_search {
            vec![Tool::google_search()]
        } else {
            Vec::new()
        };

        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools,
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a turn. Only text parts are modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A tool made available to the model.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Tool {
    /// The `google_search` grounding tool (empty config object).
    pub fn google_search() -> Self {
        Self {
            google_search: Some(serde_json::Map::new()),
        }
    }
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One reply candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,

    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
