//! webtask - LLM-Driven Web Task Agent
//!
//! A Rust command-line agent that forwards natural-language web-task
//! instructions to an external browser-automation engine, wrapping the
//! delegated call in a bounded retry loop with per-site success
//! verification.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **LLM**: LLM client abstraction with a Gemini implementation
//! - **Executor**: The task execution capability and the agent-browser engine
//! - **Agent**: Retry recovery, retry state, and success hints
//! - **CLI**: Command-line interface and REPL
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use webtask::{BrowserAgentExecutor, Config, GeminiClient, Task, TaskRunner};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load();
//!     let executor = Arc::new(BrowserAgentExecutor::from_config(&config));
//!     let llm = Arc::new(GeminiClient::from_config(&config));
//!
//!     let task = Task::new("login to https://www.saucedemo.com/").unwrap();
//!     let mut runner = TaskRunner::with_config(task, executor, llm, &config);
//!
//!     let report = runner.run().await.unwrap();
//!     println!("{}", report.summary);
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod core;
pub mod executor;
pub mod llm;

// Re-export commonly used items
pub use agent::{HintBook, ProviderHint, RetryState, TaskRunner};
pub use cli::Repl;
pub use core::{Config, ExecutionReport, Result, Task, WebtaskError};
pub use executor::{BrowserAgentExecutor, TaskExecutor};
pub use llm::{GeminiClient, LlmClient};
