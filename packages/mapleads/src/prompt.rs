//! Prompt construction for the extraction model.
//!
//! Templates ask for a raw JSON array of `{name, address, phone}` objects
//! with `"N/A"` for missing details and no surrounding prose, so the
//! normalizer has a fighting chance of parsing the reply.

use crate::error::{ExtractionError, Result};
use crate::types::ExtractionRequest;

/// Substring a Google Maps URL must contain to be accepted.
const MAPS_URL_MARKER: &str = "google.com/maps";

/// Prompt for extracting listings reachable from a Maps URL.
///
/// Directs the model to use web search to locate the listings, then look up
/// name, full street address, and the first/most prominent phone number per
/// business.
pub const URL_PROMPT: &str = r#"Your task is to extract business information from a Google Maps URL: {url}.
First, use Google Search to find all business listings at that URL.
Then, for each business found, perform a targeted search to find its official name, full street address, and primary phone number. If multiple phone numbers are listed, please return only the first or most prominent one.
Return a JSON array where each object contains "name", "address", and "phone".
If a detail for a business is unavailable, use the string "N/A".
Provide only the raw JSON array in your response."#;

/// Prompt for extracting from text the user pasted off a Maps page.
///
/// The pasted text goes verbatim inside the delimited block; no web search
/// is requested.
pub const TEXT_PROMPT: &str = r#"Your task is to extract business information from the following text data which was copied from Google Maps:

---
{text}
---

For each business found in the text, extract its official name, full street address, and primary phone number. If multiple phone numbers are listed, please return only the first or most prominent one.
Return a JSON array where each object contains "name", "address", and "phone".
If a detail for a business is unavailable, use the string "N/A".
Provide only the raw JSON array in your response."#;

/// A fully built model instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPrompt {
    /// Instruction text sent to the model.
    pub text: String,

    /// Whether the model should be given a web-search capability.
    pub web_search: bool,
}

/// Build the model instruction for a request, validating the input first.
///
/// # Errors
///
/// Returns [`ExtractionError::InvalidInput`] for a non-Maps URL or blank
/// pasted text. Validation happens before any model call is issued.
pub fn build_prompt(request: &ExtractionRequest) -> Result<ModelPrompt> {
    match request {
        ExtractionRequest::Url(url) => {
            if !url.contains(MAPS_URL_MARKER) {
                return Err(ExtractionError::invalid_input(
                    "please provide a valid Google Maps URL",
                ));
            }
            Ok(ModelPrompt {
                text: format_url_prompt(url),
                web_search: true,
            })
        }
        ExtractionRequest::Text(text) => {
            if text.trim().is_empty() {
                return Err(ExtractionError::invalid_input(
                    "please paste some text to extract from",
                ));
            }
            Ok(ModelPrompt {
                text: format_text_prompt(text),
                web_search: false,
            })
        }
    }
}

/// Format the URL extraction prompt.
pub fn format_url_prompt(url: &str) -> String {
    URL_PROMPT.replace("{url}", url)
}

/// Format the pasted-text extraction prompt.
pub fn format_text_prompt(text: &str) -> String {
    TEXT_PROMPT.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_prompt_embeds_url_and_enables_search() {
        let request =
            ExtractionRequest::Url("https://www.google.com/maps/search/cafes".to_string());
        let prompt = build_prompt(&request).unwrap();
        assert!(prompt.web_search);
        assert!(prompt.text.contains("https://www.google.com/maps/search/cafes"));
        assert!(prompt.text.contains("raw JSON array"));
    }

    #[test]
    fn test_non_maps_url_is_rejected() {
        let request = ExtractionRequest::Url("https://example.com".to_string());
        let err = build_prompt(&request).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidInput { .. }));
    }

    #[test]
    fn test_text_prompt_embeds_text_verbatim_without_search() {
        let request = ExtractionRequest::Text("Acme Cafe\n123 Main St\n555-1234".to_string());
        let prompt = build_prompt(&request).unwrap();
        assert!(!prompt.web_search);
        assert!(prompt.text.contains("Acme Cafe\n123 Main St\n555-1234"));
        assert!(!prompt.text.contains("Google Search"));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let request = ExtractionRequest::Text("   \n\t ".to_string());
        let err = build_prompt(&request).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidInput { .. }));
    }
}
