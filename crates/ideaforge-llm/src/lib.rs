//! IdeaForge LLM — generative model access.
//!
//! External providers (OpenAI / Anthropic / Groq) behind the `TextGenerator`
//! trait, provider configuration with env-var fallback, the fixed prompt
//! templates, the copilot tool set, and the structured-response parser.

pub mod client;
pub mod config;
pub mod parser;
pub mod prompts;
pub mod tools;
pub mod types;

pub use client::GenAiClient;
pub use config::LLMConfig;
pub use parser::{parse_label, parse_suggestion, Suggestion};
pub use tools::CopilotTool;
pub use types::{LLMProvider, TextGenerator};
