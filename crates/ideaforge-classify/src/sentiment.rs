//! Sentiment classification trait and fallback.

use serde::{Deserialize, Serialize};

/// Coarse sentiment for an idea text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Map a class index to a sentiment, matching the fine-tuned model's
    /// label order. Unknown indices default to neutral.
    pub fn from_class_index(index: usize) -> Self {
        match index {
            0 => Sentiment::Negative,
            2 => Sentiment::Positive,
            _ => Sentiment::Neutral,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for sentiment backends. Classification is total: any internal
/// failure maps to `Sentiment::Neutral`, never an error.
pub trait SentimentBackend: Send + Sync {
    /// Classify a text. Always returns a value from the fixed label set.
    fn classify(&self, text: &str) -> Sentiment;

    /// Check if a real model is loaded.
    fn is_available(&self) -> bool;
}

/// Fallback backend used when no model is available.
pub struct NeutralSentiment;

impl SentimentBackend for NeutralSentiment {
    fn classify(&self, _text: &str) -> Sentiment {
        Sentiment::Neutral
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_always_neutral() {
        let backend = NeutralSentiment;
        for text in ["I love this", "terrible idea", "", "🚀🚀🚀"] {
            assert_eq!(backend.classify(text), Sentiment::Neutral);
        }
        assert!(!backend.is_available());
    }

    #[test]
    fn test_class_index_mapping() {
        assert_eq!(Sentiment::from_class_index(0), Sentiment::Negative);
        assert_eq!(Sentiment::from_class_index(1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_class_index(2), Sentiment::Positive);
        assert_eq!(Sentiment::from_class_index(99), Sentiment::Neutral);
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(Sentiment::Positive.as_str(), "positive");
        assert_eq!(
            serde_json::from_str::<Sentiment>("\"negative\"").unwrap(),
            Sentiment::Negative
        );
    }
}
