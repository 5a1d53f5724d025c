//! Task runner
//!
//! The retry wrapper around one delegated task execution. Holds the
//! executor and LLM capabilities, drives the bounded retry loop, and
//! appends recovery notes to the task between attempts.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::agent::hints::HintBook;
use crate::agent::retry::RetryState;
use crate::core::{Config, ExecutionReport, Result, Task, WebtaskError};
use crate::executor::TaskExecutor;
use crate::llm::LlmClient;

/// Fixed note appended to the task before every retry
pub const RETRY_SUFFIX: &str = "(Retry: analyze the page again for form fields)";

const ANALYSIS_PROMPT: &str = "Describe the form fields visible in this screenshot: \
     their labels, input types, and any validation or error messages.";

/// Executes one task with bounded retry recovery
pub struct TaskRunner {
    /// The task description, mutated additively across attempts
    task: Task,
    /// The execution capability
    executor: Arc<dyn TaskExecutor>,
    /// LLM handle for the page-analysis recovery path
    llm: Arc<dyn LlmClient>,
    /// Per-site success markers
    hints: HintBook,
    /// Maximum retries after the initial attempt
    max_retries: usize,
    /// Whether to ask the LLM to describe the page before each retry
    analyze_on_failure: bool,
}

impl TaskRunner {
    /// Create a runner with default retry behavior
    pub fn new(task: Task, executor: Arc<dyn TaskExecutor>, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            task,
            executor,
            llm,
            hints: HintBook::builtin(),
            max_retries: 3,
            analyze_on_failure: false,
        }
    }

    /// Create a runner with retry behavior and hints from configuration
    pub fn with_config(
        task: Task,
        executor: Arc<dyn TaskExecutor>,
        llm: Arc<dyn LlmClient>,
        config: &Config,
    ) -> Self {
        Self {
            task,
            executor,
            llm,
            hints: HintBook::from_config(config),
            max_retries: config.retry.max_retries,
            analyze_on_failure: config.retry.analyze_on_failure,
        }
    }

    /// The task description in its current form
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Run the task, retrying on retryable failure.
    ///
    /// Invokes the executor at most `max_retries + 1` times. Between
    /// attempts the task text grows by a recovery note; it is never reset.
    /// The last error is returned when every attempt fails, and fatal
    /// errors are returned immediately without burning retries.
    pub async fn run(&mut self) -> Result<ExecutionReport> {
        info!(task = %self.task, "Starting task");

        let mut state = RetryState::new(self.max_retries);

        loop {
            match self.attempt().await {
                Ok(report) => {
                    info!("Task completed successfully");
                    return Ok(report);
                }
                Err(err) if err.is_retryable() && state.should_continue() => {
                    warn!(error = %err, "Error during task");

                    let attempt = state.next_attempt();
                    info!("Retry attempt {}/{}", attempt, self.max_retries);

                    let note = self.recovery_note().await;
                    self.task.append_note(&note);
                }
                Err(err) => {
                    if err.is_retryable() {
                        error!(error = %err, "Max retries exceeded, task failed");
                    } else {
                        error!(error = %err, "Fatal error, task failed");
                    }
                    return Err(err);
                }
            }
        }
    }

    /// One executor invocation plus success verification
    async fn attempt(&self) -> Result<ExecutionReport> {
        let report = self.executor.execute(self.task.as_str()).await?;
        self.verify(report).await
    }

    /// Compare the post-run URL against the site's success marker, if the
    /// task targets a site with a known hint.
    async fn verify(&self, mut report: ExecutionReport) -> Result<ExecutionReport> {
        let hint = match self.hints.hint_for(self.task.as_str()) {
            Some(hint) => hint,
            None => return Ok(report),
        };

        let final_url = match report.final_url.clone() {
            Some(url) => url,
            None => match self.executor.current_url().await {
                Ok(url) => url,
                Err(err) => {
                    // Inconclusive: the engine finished but cannot report
                    // where it landed. Don't fail a completed attempt on it.
                    debug!(error = %err, "Could not read final URL, skipping verification");
                    return Ok(report);
                }
            },
        };

        if hint.verify(&final_url) {
            report.final_url = Some(final_url);
            Ok(report)
        } else {
            Err(WebtaskError::verification(&hint.site, &hint.success_url))
        }
    }

    /// Build the note appended to the task before a retry.
    ///
    /// The fixed suffix is always present; when enabled, an LLM description
    /// of the current page is appended after it. Analysis failures degrade
    /// to the fixed suffix alone.
    async fn recovery_note(&self) -> String {
        if self.analyze_on_failure {
            match self.analyze_page().await {
                Ok(analysis) => return format!("{} Page analysis: {}", RETRY_SUFFIX, analysis),
                Err(err) => debug!(error = %err, "Page analysis unavailable"),
            }
        }

        RETRY_SUFFIX.to_string()
    }

    /// Ask the LLM what the current page looks like, so the retry aims at
    /// the fields that are actually there.
    async fn analyze_page(&self) -> Result<String> {
        let png = self.executor.screenshot().await?;
        let description = self.llm.complete(ANALYSIS_PROMPT, Some(&png)).await?;
        debug!(analysis = %description, "Screenshot analysis");
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Executor scripted with a sequence of outcomes
    struct ScriptedExecutor {
        outcomes: Mutex<Vec<Result<ExecutionReport>>>,
        calls: AtomicUsize,
    }

    impl ScriptedExecutor {
        fn new(outcomes: Vec<Result<ExecutionReport>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TaskExecutor for ScriptedExecutor {
        async fn execute(&self, _task: &str) -> Result<ExecutionReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                Ok(ExecutionReport::new("done"))
            } else {
                outcomes.remove(0)
            }
        }

        async fn current_url(&self) -> Result<String> {
            Ok("https://example.com/".to_string())
        }

        async fn screenshot(&self) -> Result<Vec<u8>> {
            Err(WebtaskError::execution("no screenshot in tests"))
        }
    }

    struct SilentLlm;

    #[async_trait]
    impl LlmClient for SilentLlm {
        async fn complete(&self, _prompt: &str, _image: Option<&[u8]>) -> Result<String> {
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "silent"
        }
    }

    fn runner_with(executor: Arc<ScriptedExecutor>) -> TaskRunner {
        TaskRunner::new(
            Task::new("login to example.com").unwrap(),
            executor,
            Arc::new(SilentLlm),
        )
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_invokes_once() {
        let executor = Arc::new(ScriptedExecutor::new(vec![Ok(ExecutionReport::new("ok"))]));
        let mut runner = runner_with(Arc::clone(&executor));

        let report = runner.run().await.unwrap();
        assert_eq!(report.summary, "ok");
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_fatal_error_returns_without_retry() {
        let executor = Arc::new(ScriptedExecutor::new(vec![Err(WebtaskError::EngineNotFound)]));
        let mut runner = runner_with(Arc::clone(&executor));

        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, WebtaskError::EngineNotFound));
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_appends_fixed_suffix() {
        let executor = Arc::new(ScriptedExecutor::new(vec![
            Err(WebtaskError::execution("element not found")),
            Ok(ExecutionReport::new("ok")),
        ]));
        let mut runner = runner_with(Arc::clone(&executor));
        let original_len = runner.task().len();

        runner.run().await.unwrap();

        assert_eq!(executor.calls(), 2);
        assert!(runner.task().len() > original_len);
        assert!(runner.task().as_str().contains(RETRY_SUFFIX));
        assert!(runner.task().as_str().starts_with("login to example.com"));
    }
}
