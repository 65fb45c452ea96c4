//! LLM provider configuration persistence and selection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::LLMProvider;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Stored provider configuration (persisted to llm-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "auto".into(),
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            config_path: PathBuf::new(),
        }
    }
}

impl LLMConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: LLMConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        // Env vars as fallback for API keys
        if config.openai_api_key.is_none() {
            config.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if config.anthropic_api_key.is_none() {
            config.anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }
        if config.groq_api_key.is_none() {
            config.groq_api_key = std::env::var("GROQ_API_KEY").ok();
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved LLM config to {}", self.config_path.display());
        Ok(())
    }

    /// Resolve which provider, model, and key to use for a generation call.
    pub fn resolve_provider(&self) -> Option<(LLMProvider, String, String)> {
        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "openai" => self
                    .openai_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::OpenAI, self.openai_model.clone(), k.clone())),
                "anthropic" => self
                    .anthropic_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone())),
                "groq" => self
                    .groq_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Groq, self.groq_model.clone(), k.clone())),
                _ => None,
            };
        }

        // Auto mode: Anthropic > Groq > OpenAI
        if let Some(k) = &self.anthropic_api_key {
            return Some((LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone()));
        }
        if let Some(k) = &self.groq_api_key {
            return Some((LLMProvider::Groq, self.groq_model.clone(), k.clone()));
        }
        if let Some(k) = &self.openai_api_key {
            return Some((LLMProvider::OpenAI, self.openai_model.clone(), k.clone()));
        }

        None
    }

    /// Public view of the configuration: which providers are configured,
    /// never the keys themselves.
    pub fn to_response(&self) -> serde_json::Value {
        let resolved = self.resolve_provider();
        serde_json::json!({
            "preferredProvider": self.preferred_provider,
            "openaiConfigured": self.openai_api_key.is_some(),
            "anthropicConfigured": self.anthropic_api_key.is_some(),
            "groqConfigured": self.groq_api_key.is_some(),
            "activeProvider": resolved.map(|(p, _, _)| p.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preference_wins() {
        let config = LLMConfig {
            preferred_provider: "groq".into(),
            anthropic_api_key: Some("ak".into()),
            groq_api_key: Some("gk".into()),
            ..Default::default()
        };
        let (provider, _, key) = config.resolve_provider().unwrap();
        assert_eq!(provider, LLMProvider::Groq);
        assert_eq!(key, "gk");
    }

    #[test]
    fn test_auto_priority() {
        let config = LLMConfig {
            openai_api_key: Some("ok".into()),
            groq_api_key: Some("gk".into()),
            ..Default::default()
        };
        let (provider, _, _) = config.resolve_provider().unwrap();
        assert_eq!(provider, LLMProvider::Groq);
    }

    #[test]
    fn test_no_keys_resolves_none() {
        let config = LLMConfig::default();
        assert!(config.resolve_provider().is_none());
    }

    #[test]
    fn test_response_masks_keys() {
        let config = LLMConfig {
            openai_api_key: Some("secret".into()),
            ..Default::default()
        };
        let response = serde_json::to_string(&config.to_response()).unwrap();
        assert!(!response.contains("secret"));
        assert!(response.contains("openaiConfigured"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("llm-config.json");

        let config = LLMConfig {
            preferred_provider: "openai".into(),
            openai_api_key: Some("key".into()),
            config_path: path.clone(),
            ..Default::default()
        };
        config.save().unwrap();

        let loaded = LLMConfig::load(&path);
        assert_eq!(loaded.preferred_provider, "openai");
        assert_eq!(loaded.openai_api_key.as_deref(), Some("key"));
    }
}
