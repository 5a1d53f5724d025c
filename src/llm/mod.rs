//! LLM module - Language Model integrations
//!
//! Provides a small client abstraction with Gemini as the primary backend.

pub mod gemini;
pub mod traits;

pub use gemini::GeminiClient;
pub use traits::LlmClient;
