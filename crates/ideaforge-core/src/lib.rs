//! IdeaForge Core — shared error type and configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, ForgeConfig};
pub use error::{Error, Result};

/// Current epoch time in milliseconds. All persisted timestamps use this.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
