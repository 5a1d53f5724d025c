//! Interactive REPL for webtask
//!
//! Provides the main user interaction loop. Each instruction gets a fresh
//! runner and task; failures are reported and the loop keeps going.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;

use crate::agent::TaskRunner;
use crate::cli::commands::{classify, enhance_instruction, Input};
use crate::core::{Config, Result, Task};
use crate::executor::{BrowserAgentExecutor, TaskExecutor};
use crate::llm::{GeminiClient, LlmClient};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    config: Config,
    executor: Arc<dyn TaskExecutor>,
    llm: Arc<dyn LlmClient>,
}

impl Repl {
    /// Create a new REPL with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    /// Create a REPL with custom configuration
    pub fn with_config(config: Config) -> Self {
        let executor: Arc<dyn TaskExecutor> = Arc::new(BrowserAgentExecutor::from_config(&config));
        let llm: Arc<dyn LlmClient> = Arc::new(GeminiClient::from_config(&config));

        Self {
            config,
            executor,
            llm,
        }
    }

    /// Run the REPL until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();

        if !BrowserAgentExecutor::is_available().await {
            println!("Warning: agent-browser not found. Tasks will fail until it is installed.");
            println!("   To install: npm install -g agent-browser && agent-browser install");
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("\nWhat would you like me to do? ");
            stdout.flush()?;

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    // EOF (Ctrl+D)
                    println!("\nGoodbye!");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    continue;
                }
            }

            match classify(&line) {
                Input::Exit => {
                    info!("User requested to exit, shutting down");
                    println!("Goodbye!");
                    break;
                }
                Input::Empty => {
                    println!("Please provide a valid instruction.");
                    continue;
                }
                Input::Instruction(instruction) => {
                    self.process(&instruction).await;
                }
            }
        }

        Ok(())
    }

    /// Run one instruction through a fresh runner
    async fn process(&self, instruction: &str) {
        let task = match Task::new(enhance_instruction(instruction)) {
            Ok(task) => task,
            Err(e) => {
                println!("Could not start task: {}", e);
                return;
            }
        };

        let mut runner = TaskRunner::with_config(
            task,
            Arc::clone(&self.executor),
            Arc::clone(&self.llm),
            &self.config,
        );

        match runner.run().await {
            Ok(report) => {
                if self.config.retry.debug && !report.summary.is_empty() {
                    println!("{}", report.summary);
                }
                println!("Task completed! Ready for the next instruction.");
                println!("------------------------------------------------");
            }
            Err(e) => {
                println!("Task failed: {}. Please try again or type a new instruction.", e);
            }
        }
    }

    /// Print the startup banner
    fn print_banner(&self) {
        println!("Welcome to the Web Action Agent! Type your instruction or 'quit' to exit.");
        println!(
            "Example: Login to https://www.saucedemo.com/ with username standard_user and password secret_sauce"
        );
        println!();
        println!("Model:       {}", self.config.llm.model);
        println!("Max retries: {}", self.config.retry.max_retries);
        println!("─────────────────────────────────────────────────────────────────");
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
