//! IdeaForge Pipeline — orchestration of generation, labeling, and rendering.
//!
//! Two independent paths: the idea generation pipeline (suggestion →
//! auto-label → deterministic fallback) and the copilot path (tool prompt →
//! generation → markdown render, error block on failure). Both always produce
//! a displayable result; external failures become `warning` fields, never
//! response errors.

pub mod copilot;
pub mod generate;
pub mod markdown;

pub use copilot::{run_copilot, CopilotReport};
pub use generate::{generate_idea, IdeaSuggestion};
pub use markdown::{render, render_preformatted};
