//! webtask - LLM-Driven Web Task Agent
//!
//! Main entry point for the CLI application.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use webtask::cli::commands::enhance_instruction;
use webtask::{BrowserAgentExecutor, Config, GeminiClient, Repl, Task, TaskRunner};

/// webtask - LLM-Driven Web Task Agent
#[derive(Parser, Debug)]
#[command(name = "webtask")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model driving the browser engine and page analysis
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Maximum retries after a failed attempt
    #[arg(long)]
    max_retries: Option<usize>,

    /// Run in headed browser mode (visible window)
    #[arg(long)]
    headed: bool,

    /// Disable LLM page analysis between retries
    #[arg(long)]
    no_analyze: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,

    /// Single task mode (non-interactive)
    #[arg(long, short = 'p')]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref model) = args.model {
        config.llm.model = model.clone();
    }

    if let Some(max_retries) = args.max_retries {
        config.retry.max_retries = max_retries;
    }

    if args.headed {
        config.browser.headed = true;
    }

    if args.no_analyze {
        config.retry.analyze_on_failure = false;
    }

    if args.debug {
        config.retry.debug = true;
    }

    init_tracing(config.retry.debug);

    // Single task mode
    if let Some(prompt) = args.prompt {
        let executor = Arc::new(BrowserAgentExecutor::from_config(&config));
        let llm = Arc::new(GeminiClient::from_config(&config));

        let task = Task::new(enhance_instruction(&prompt))?;
        let mut runner = TaskRunner::with_config(task, executor, llm, &config);

        let report = runner.run().await?;
        println!("{}", report.summary);
        return Ok(());
    }

    // Interactive REPL mode
    let mut repl = Repl::with_config(config);
    repl.run().await?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "webtask=debug" } else { "webtask=info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
