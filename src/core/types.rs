//! Shared types used across webtask modules
//!
//! Contains the task description, execution reports, and hint entries.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WebtaskError};

/// A natural-language task description.
///
/// The text is append-only: recovery notes are added between retry
/// attempts, and the description is never truncated or reset while a
/// task is being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
}

impl Task {
    /// Create a task from a non-empty description
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(WebtaskError::InvalidTask(
                "task description is empty".to_string(),
            ));
        }
        Ok(Self { text })
    }

    /// Append a recovery note to the description
    pub fn append_note(&mut self, note: &str) {
        self.text.push(' ');
        self.text.push_str(note);
    }

    /// The current description text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the current description in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the description is empty (never true for a constructed task)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// What a successful executor attempt yields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// The engine's textual summary of what it did
    pub summary: String,
    /// Final page URL, when the engine reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
}

impl ExecutionReport {
    /// Create a report with just a summary
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            final_url: None,
        }
    }

    /// Create a report with a final URL
    pub fn with_url(summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            final_url: Some(url.into()),
        }
    }
}

/// A per-site success hint, as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintEntry {
    /// Site identifier looked for in the task text
    pub site: String,
    /// URL fragment expected after a successful run
    pub success_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_rejects_empty() {
        assert!(Task::new("").is_err());
        assert!(Task::new("   \t ").is_err());
        assert!(Task::new("login to example.com").is_ok());
    }

    #[test]
    fn test_task_append_is_additive() {
        let mut task = Task::new("login to example.com").unwrap();
        let before = task.len();
        task.append_note("(Retry: analyze the page again for form fields)");
        assert!(task.len() > before);
        assert!(task.as_str().starts_with("login to example.com"));
        assert!(task.as_str().ends_with("form fields)"));
    }

    #[test]
    fn test_report_builders() {
        let report = ExecutionReport::with_url("done", "https://example.com/ok");
        assert_eq!(report.summary, "done");
        assert_eq!(report.final_url.as_deref(), Some("https://example.com/ok"));
    }
}
