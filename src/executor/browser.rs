//! Browser engine executor - wraps the agent-browser CLI
//!
//! Delegates whole tasks to agent-browser's autonomous mode and exposes the
//! post-run queries the agent needs for verification and recovery.

use async_trait::async_trait;
use base64::Engine;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::{Config, ExecutionReport, Result, WebtaskError};
use crate::executor::TaskExecutor;

/// Executor that delegates tasks to the agent-browser CLI
pub struct BrowserAgentExecutor {
    /// Session name for isolation
    session_name: String,
    /// Whether to run in headed mode
    headed: bool,
    /// Model the engine should drive its reasoning with
    model: String,
}

impl BrowserAgentExecutor {
    /// Create a new executor
    pub fn new(session_name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            headed: false,
            model: model.into(),
        }
    }

    /// Create an executor from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            session_name: config.browser.session_name.clone(),
            headed: config.browser.headed,
            model: config.llm.model.clone(),
        }
    }

    /// Check if agent-browser is installed
    pub async fn is_available() -> bool {
        Command::new("agent-browser")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Run an agent-browser command
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("agent-browser");
        cmd.args(["--session", &self.session_name]);

        if self.headed {
            cmd.arg("--headed");
        }

        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WebtaskError::EngineNotFound
            } else {
                WebtaskError::execution(format!("Failed to run agent-browser: {}", e))
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(WebtaskError::execution(format!(
                "agent-browser command failed: {}",
                stderr.trim()
            )))
        }
    }
}

#[async_trait]
impl TaskExecutor for BrowserAgentExecutor {
    async fn execute(&self, task: &str) -> Result<ExecutionReport> {
        let output = self
            .run_command(&["run", task, "--model", &self.model])
            .await?;

        Ok(ExecutionReport::new(output.trim()))
    }

    async fn current_url(&self) -> Result<String> {
        self.run_command(&["get", "url"])
            .await
            .map(|s| s.trim().to_string())
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        let output = self.run_command(&["screenshot"]).await?;

        base64::engine::general_purpose::STANDARD
            .decode(output.trim())
            .map_err(|e| WebtaskError::execution(format!("Invalid screenshot payload: {}", e)))
    }
}

impl Default for BrowserAgentExecutor {
    fn default() -> Self {
        Self::new("webtask", "gemini-2.0-flash-exp")
    }
}
