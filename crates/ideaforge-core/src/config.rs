//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all IdeaForge data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// SQLite database directory (`data/db/`).
    pub db: PathBuf,
    /// Classifier model directory (`data/models/`).
    pub models: PathBuf,
    /// LLM provider configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            db: root.join("db"),
            models: root.join("models"),
            llm_config_file: root.join("llm-config.json"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.db)?;
        std::fs::create_dir_all(&self.models)?;
        Ok(())
    }
}

/// Top-level IdeaForge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Activation threshold for the multi-label topic classifier.
    pub topic_threshold: f32,
}

impl ForgeConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3010);

        let topic_threshold = std::env::var("IDEAFORGE_TOPIC_THRESHOLD")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0.5);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            topic_threshold,
        })
    }
}
