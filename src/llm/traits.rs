//! LLM client trait for abstracting different backends
//!
//! The agent only needs one operation: a text completion for a prompt,
//! optionally grounded in a captured screenshot. The small seam makes it
//! easy to substitute a scripted client in tests.

use async_trait::async_trait;

use crate::core::Result;

/// Trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a text completion for a prompt, optionally attaching a
    /// PNG screenshot for the model to look at
    async fn complete(&self, prompt: &str, image: Option<&[u8]>) -> Result<String>;

    /// Get the client name
    fn name(&self) -> &str;
}
