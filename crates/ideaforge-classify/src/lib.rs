//! IdeaForge Classify — in-process text classification.
//!
//! Provides the `SentimentBackend` and `TopicBackend` traits plus the pure
//! keyword labeler. When the `onnx` feature is enabled and model files are
//! present, fine-tuned sequence classifiers are loaded via ONNX Runtime.
//! Without them, classification degrades to the neutral/empty fallbacks and
//! the keyword labeler carries category assignment alone.

pub mod labeler;
pub mod onnx;
pub mod sentiment;
pub mod topics;

pub use labeler::assign_label;
pub use sentiment::{NeutralSentiment, Sentiment, SentimentBackend};
pub use topics::{NoopTopics, TopicBackend, TOPIC_LABELS};

use std::path::Path;
use std::sync::Arc;

/// Create the best available sentiment backend for the given model directory.
///
/// Tries ONNX first (feature enabled and model files present), falls back to
/// the always-neutral backend. Called once at startup; the returned handle is
/// shared, immutable state.
pub fn create_sentiment_backend(model_dir: &Path) -> Arc<dyn SentimentBackend> {
    #[cfg(feature = "onnx")]
    {
        match onnx::OnnxSentiment::load(model_dir) {
            Ok(backend) => {
                tracing::info!("Using ONNX sentiment classifier");
                return Arc::new(backend);
            }
            Err(e) => {
                tracing::warn!("ONNX sentiment unavailable: {}. Defaulting to neutral.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
        tracing::info!("ONNX feature disabled. Sentiment defaults to neutral.");
    }

    Arc::new(NeutralSentiment)
}

/// Create the best available topic backend. Same fallback shape as sentiment:
/// without a model, topic sets come back empty.
pub fn create_topic_backend(model_dir: &Path) -> Arc<dyn TopicBackend> {
    #[cfg(feature = "onnx")]
    {
        match onnx::OnnxTopics::load(model_dir) {
            Ok(backend) => {
                tracing::info!("Using ONNX topic classifier ({} labels)", TOPIC_LABELS.len());
                return Arc::new(backend);
            }
            Err(e) => {
                tracing::warn!("ONNX topics unavailable: {}. Topic sets will be empty.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
    }

    Arc::new(NoopTopics)
}
