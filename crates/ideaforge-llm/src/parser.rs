//! Parser for semi-structured model responses.
//!
//! The suggestion prompt asks for `Name:` / `Tagline:` / `Tech Stack:` lines,
//! but the parser assumes nothing: fields may be missing, reordered, or
//! surrounded by extra prose. Missing fields get sentinel defaults. Parsing
//! never fails; only the generating call itself can.

/// Sentinel for fields the model did not produce.
pub const FIELD_DEFAULT: &str = "N/A";

/// Substituted when no usable tech stack line is found.
pub const DEFAULT_TECH_STACK: &[&str] = &["Rust", "Axum", "SQLite"];

/// Default label when a label response comes back empty.
pub const DEFAULT_LABEL: &str = "General";

/// Structured fields extracted from a suggestion response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub tagline: String,
    pub tech_stack: Vec<String>,
}

/// Extract name, tagline, and tech stack from free text.
///
/// Case-insensitive prefix match per line; the first colon splits key from
/// value; unrecognized lines are ignored.
pub fn parse_suggestion(text: &str) -> Suggestion {
    let mut name = FIELD_DEFAULT.to_string();
    let mut tagline = FIELD_DEFAULT.to_string();
    let mut tech_stack: Vec<String> = Vec::new();

    for line in text.lines() {
        let low = line.trim().to_lowercase();
        if low.starts_with("name:") {
            if let Some(value) = field_value(line) {
                name = value;
            }
        } else if low.starts_with("tagline:") {
            if let Some(value) = field_value(line) {
                tagline = value;
            }
        } else if low.starts_with("tech stack:") {
            if let Some(value) = field_value(line) {
                tech_stack = value
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();
            }
        }
    }

    if tech_stack.is_empty() {
        tech_stack = DEFAULT_TECH_STACK.iter().map(|s| s.to_string()).collect();
    }

    Suggestion {
        name,
        tagline,
        tech_stack,
    }
}

fn field_value(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, v)| v.trim().to_string())
}

/// Treat the whole trimmed response as a single short label.
pub fn parse_label(text: &str) -> String {
    let label = text.trim();
    if label.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        label.to_string()
    }
}
