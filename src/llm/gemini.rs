//! Google Gemini client
//!
//! Async HTTP client for the Generative Language API, authenticated with an
//! API key from the environment.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use std::time::Duration;

use crate::core::{Config, Result, WebtaskError};
use crate::llm::traits::LlmClient;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    model: String,
}

impl GeminiClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            model: config.llm.model.clone(),
        }
    }

    fn api_key() -> Result<String> {
        std::env::var("GEMINI_API_KEY")
            .map_err(|_| WebtaskError::config("GEMINI_API_KEY not set"))
    }

    /// Send a generateContent request and extract the first candidate's text
    async fn generate(&self, parts: Vec<serde_json::Value>) -> Result<String> {
        let key = Self::api_key()?;
        let url = format!("{}/{}:generateContent?key={}", API_BASE, self.model, key);

        let body = serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "candidateCount": 1,
            }
        });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(WebtaskError::llm(format!("Gemini API error: {}", error_text)));
        }

        let response_json: serde_json::Value = resp.json().await?;

        let content = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| WebtaskError::llm("Failed to parse response content"))?
            .to_string();

        Ok(content)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str, image: Option<&[u8]>) -> Result<String> {
        let mut parts = vec![serde_json::json!({ "text": prompt })];

        if let Some(png) = image {
            let encoded = base64::engine::general_purpose::STANDARD.encode(png);
            parts.push(serde_json::json!({
                "inline_data": {
                    "mime_type": "image/png",
                    "data": encoded,
                }
            }));
        }

        self.generate(parts).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
