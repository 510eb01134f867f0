//! Domain types for extracted business records.

use serde::{Deserialize, Serialize};

/// Sentinel the model is told to use for a missing field.
pub const NOT_AVAILABLE: &str = "N/A";

/// One extracted business record.
///
/// Records emitted by the normalizer always carry a usable phone number;
/// `name` and `address` may be the `"N/A"` sentinel. A lead without a phone
/// number is not useful, so phone-less candidates never leave the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl BusinessInfo {
    /// True when the trimmed phone is neither empty nor the `"N/A"` sentinel.
    pub fn has_usable_phone(&self) -> bool {
        let phone = self.phone.trim();
        !phone.is_empty() && phone != NOT_AVAILABLE
    }
}

/// What the user handed us: a Maps URL or text pasted from a Maps page.
///
/// Created per user action, consumed immediately by the prompt builder.
/// Each variant carries its own validation rule (see [`crate::prompt`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRequest {
    /// A Google Maps URL; the model is asked to locate listings via search.
    Url(String),
    /// Raw text copied from a Maps page, embedded verbatim in the prompt.
    Text(String),
}
