//! Multi-label topic classification trait and fallback.

/// The fixed topic label set the classifier was trained on.
pub const TOPIC_LABELS: &[&str] = &[
    "AI/ML",
    "FinTech",
    "HealthTech",
    "EdTech",
    "E-commerce",
    "GreenTech",
    "Social Media",
    "General",
];

/// Trait for topic backends. Multi-label: every label whose activation
/// crosses `threshold` is returned; if none cross, the single best guess.
/// Failures degrade to an empty set, never an error.
pub trait TopicBackend: Send + Sync {
    fn classify(&self, text: &str, threshold: f32) -> Vec<String>;

    fn is_available(&self) -> bool;
}

/// Fallback backend used when no model is available. Returns empty topic sets.
pub struct NoopTopics;

impl TopicBackend for NoopTopics {
    fn classify(&self, _text: &str, _threshold: f32) -> Vec<String> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Select topic labels from per-label activations: all labels crossing the
/// threshold, or the single best guess when nothing does.
pub fn select_labels(probs: &[f32], threshold: f32) -> Vec<String> {
    let mut on: Vec<String> = probs
        .iter()
        .enumerate()
        .filter(|(i, &p)| p >= threshold && *i < TOPIC_LABELS.len())
        .map(|(i, _)| TOPIC_LABELS[i].to_string())
        .collect();

    if on.is_empty() {
        let best = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i);
        if let Some(i) = best {
            if i < TOPIC_LABELS.len() {
                on.push(TOPIC_LABELS[i].to_string());
            }
        }
    }
    on
}
