//! Provider adapters implementing [`crate::ModelClient`].

mod gemini;

pub use gemini::GeminiModel;
