//! Business-Lead Extraction from Google Maps Listings
//!
//! The model does the reading; this library does the distrusting. It builds
//! the instruction sent to a generative model, defensively normalizes the
//! model's free-form reply into validated [`BusinessInfo`] records, and
//! accumulates results for display and export.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapleads::{ExtractionRequest, Extractor, Session};
//! use mapleads::testing::MockModel;
//!
//! let extractor = Extractor::new(MockModel::new());
//! let records = extractor
//!     .extract(&ExtractionRequest::Url("https://www.google.com/maps/...".into()))
//!     .await?;
//!
//! let mut session = Session::new();
//! session.prepend(records);
//! ```
//!
//! # Modules
//!
//! - [`prompt`] - instruction templates and input validation
//! - [`normalize`] - untrusted-reply normalization into typed records
//! - [`pipeline`] - one-call-per-request extraction orchestration
//! - [`session`] - session-local result accumulation
//! - [`model`] - the provider seam ([`ModelClient`])
//! - [`testing`] - mock model client for tests

pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod session;
pub mod testing;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use model::ModelClient;
pub use normalize::{normalize_reply, strip_code_fence};
pub use pipeline::Extractor;
pub use prompt::{build_prompt, ModelPrompt};
pub use session::Session;
pub use types::{BusinessInfo, ExtractionRequest, NOT_AVAILABLE};
