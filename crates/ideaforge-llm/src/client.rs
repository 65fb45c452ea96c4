//! Non-streaming generative client for external providers.
//!
//! One prompt in, one block of text out. OpenAI and Groq share the
//! chat-completions format; Anthropic uses the Messages API. No retries and
//! no streaming; a failed or unconfigured call surfaces as `Error::Inference`
//! and the pipeline decides what to substitute.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::LLMConfig;
use crate::types::{LLMProvider, TextGenerator};
use ideaforge_core::{Error, Result};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";

const MAX_TOKENS: usize = 2048;

/// Generative client over the configured provider.
pub struct GenAiClient {
    http: Client,
    config: RwLock<LLMConfig>,
}

impl GenAiClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            http: Client::new(),
            config: RwLock::new(config),
        }
    }

    /// Snapshot the public config view.
    pub fn config_response(&self) -> serde_json::Value {
        self.config.read().to_response()
    }

    /// Whether any provider is configured.
    pub fn is_configured(&self) -> bool {
        self.config.read().resolve_provider().is_some()
    }

    /// Replace the stored configuration and persist it.
    pub fn update_config(&self, config: LLMConfig) -> std::io::Result<()> {
        config.save()?;
        *self.config.write() = config;
        Ok(())
    }

    async fn generate_openai_compat(
        &self,
        url: &str,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String> {
        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": MAX_TOKENS,
        });

        debug!("Generating via {} with model {}", url, model);

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Malformed response: {}", e)))?;

        parsed["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| Error::Inference("Response missing message content".into()))
    }

    async fn generate_anthropic(&self, model: &str, api_key: &str, prompt: &str) -> Result<String> {
        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": MAX_TOKENS,
        });

        debug!("Generating via Anthropic with model {}", model);

        let response = self
            .http
            .post(ANTHROPIC_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Malformed response: {}", e)))?;

        parsed["content"][0]["text"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| Error::Inference("Response missing content text".into()))
    }
}

#[async_trait]
impl TextGenerator for GenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let (provider, model, api_key) = self
            .config
            .read()
            .resolve_provider()
            .ok_or_else(|| Error::Config("No LLM provider configured".into()))?;

        match provider {
            LLMProvider::OpenAI => {
                self.generate_openai_compat(OPENAI_URL, &model, &api_key, prompt)
                    .await
            }
            LLMProvider::Groq => {
                self.generate_openai_compat(GROQ_URL, &model, &api_key, prompt)
                    .await
            }
            LLMProvider::Anthropic => self.generate_anthropic(&model, &api_key, prompt).await,
        }
    }
}
