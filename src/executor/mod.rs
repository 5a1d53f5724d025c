//! Executor module - the task execution capability
//!
//! The agent holds an executor capability and calls it, rather than
//! extending the engine's own types. Anything that can carry out one
//! end-to-end attempt at a task can stand in for the real browser engine.

pub mod browser;

use async_trait::async_trait;

use crate::core::{ExecutionReport, Result};

pub use browser::BrowserAgentExecutor;

/// Capability to perform one attempt at carrying out a task end-to-end
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    /// Execute the task once. Errors are classified by
    /// [`WebtaskError::is_retryable`](crate::core::WebtaskError::is_retryable).
    async fn execute(&self, task: &str) -> Result<ExecutionReport>;

    /// URL of the page the engine finished on
    async fn current_url(&self) -> Result<String>;

    /// PNG screenshot of the page the engine finished on
    async fn screenshot(&self) -> Result<Vec<u8>>;
}
