//! Agent module - retry recovery around delegated task execution
//!
//! Contains the task runner, its retry state, and the per-site success
//! hint table.

pub mod hints;
pub mod retry;
pub mod runner;

pub use hints::{HintBook, ProviderHint};
pub use retry::RetryState;
pub use runner::{TaskRunner, RETRY_SUFFIX};
