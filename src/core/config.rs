//! Configuration management for webtask
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/webtask/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{Result, WebtaskError};
use crate::core::types::HintEntry;

/// Main configuration for webtask
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM configuration
    pub llm: LlmConfig,
    /// Browser engine configuration
    pub browser: BrowserConfig,
    /// Retry behavior configuration
    pub retry: RetryConfig,
    /// Extra per-site success hints, merged over the built-in table
    #[serde(default)]
    pub hints: Vec<HintEntry>,
}

/// LLM client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model used for page analysis
    /// Default: gemini-2.0-flash-exp
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Browser engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Session name for agent-browser isolation
    pub session_name: String,
    /// Whether to run in headed mode (visible browser)
    pub headed: bool,
}

/// Retry behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum retries after the initial attempt
    /// Default: 3
    pub max_retries: usize,
    /// Whether to ask the LLM to describe the page before each retry
    pub analyze_on_failure: bool,
    /// Whether to show debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            browser: BrowserConfig::default(),
            retry: RetryConfig::default(),
            hints: Vec::new(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: env::var("WEBTASK_MODEL").unwrap_or_else(|_| "gemini-2.0-flash-exp".to_string()),
            timeout_secs: 120,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            session_name: env::var("WEBTASK_BROWSER_SESSION")
                .unwrap_or_else(|_| "webtask".to_string()),
            headed: env::var("WEBTASK_BROWSER_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: env::var("WEBTASK_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            analyze_on_failure: env::var("WEBTASK_ANALYZE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            debug: env::var("WEBTASK_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("webtask")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(WebtaskError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| WebtaskError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| WebtaskError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| WebtaskError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| WebtaskError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| WebtaskError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
