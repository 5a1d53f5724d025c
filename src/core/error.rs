//! Custom error types for webtask
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for webtask operations
#[derive(Error, Debug)]
pub enum WebtaskError {
    /// A task execution attempt failed in the browser engine
    #[error("Execution error: {0}")]
    Execution(String),

    /// Post-run state did not match the expected success marker
    #[error("Verification failed for {site}: expected '{marker}' in final URL")]
    Verification { site: String, marker: String },

    /// LLM client errors (completion or image analysis)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task validation errors
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Browser engine not installed
    #[error("agent-browser not found. Install with: npm install -g agent-browser && agent-browser install")]
    EngineNotFound,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for webtask operations
pub type Result<T> = std::result::Result<T, WebtaskError>;

impl WebtaskError {
    /// Create an execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a verification error
    pub fn verification(site: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::Verification {
            site: site.into(),
            marker: marker.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether another executor attempt could plausibly succeed.
    ///
    /// Engine attempt failures and success-marker mismatches are worth
    /// retrying; a missing binary, bad configuration, or an invalid task
    /// will fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Execution(_) | Self::Verification { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(WebtaskError::execution("timeout").is_retryable());
        assert!(WebtaskError::verification("saucedemo", "inventory.html").is_retryable());
        assert!(!WebtaskError::EngineNotFound.is_retryable());
        assert!(!WebtaskError::config("missing key").is_retryable());
        assert!(!WebtaskError::InvalidTask("empty".to_string()).is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = WebtaskError::verification("saucedemo", "inventory.html");
        let msg = err.to_string();
        assert!(msg.contains("saucedemo"));
        assert!(msg.contains("inventory.html"));
    }
}
