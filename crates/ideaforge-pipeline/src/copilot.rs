//! The copilot tool pipeline.

use serde::Serialize;
use tracing::warn;

use crate::markdown::{render, render_preformatted};
use ideaforge_llm::{CopilotTool, TextGenerator};

/// A rendered copilot report. Always displayable: on failure the markdown is
/// a synthesized error block and `warning` carries the cause.
#[derive(Debug, Clone, Serialize)]
pub struct CopilotReport {
    pub tool: &'static str,
    pub title: &'static str,
    pub markdown: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Run a copilot tool over the user's input.
pub async fn run_copilot<G: TextGenerator + ?Sized>(
    gen: &G,
    tool: CopilotTool,
    user_input: &str,
) -> CopilotReport {
    let (markdown, html, warning) = match gen.generate(&tool.prompt(user_input)).await {
        Ok(text) => {
            let html = render(&text);
            (text, html, None)
        }
        Err(e) => {
            warn!("Copilot tool {} failed: {}", tool.key(), e);
            let details = e.to_string();
            let markdown = format!(
                "## Error\nSorry, something went wrong.\n\n**Details:** {}",
                details
            );
            // Error details come from upstream responses and may carry
            // markup; escape them instead of rendering them.
            let html = format!("<h2>Error</h2>\n{}", render_preformatted(&details));
            (markdown, html, Some(details))
        }
    };

    CopilotReport {
        tool: tool.key(),
        title: tool.title(),
        markdown,
        html,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ideaforge_core::{Error, Result};

    struct FixedGenerator(Result<String>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(Error::Inference(e.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_success_renders_markdown() {
        let gen = FixedGenerator(Ok("## Summary\n\n| A | B |\n|---|---|\n| 1 | 2 |\n".into()));

        let report = run_copilot(&gen, CopilotTool::Market, "a b2b saas").await;
        assert_eq!(report.tool, "market");
        assert!(report.html.contains("<h2>Summary</h2>"));
        assert!(report.html.contains("<table>"));
        assert!(report.warning.is_none());
    }

    #[tokio::test]
    async fn test_failure_still_renders_error_block() {
        let gen = FixedGenerator(Err(Error::Inference("model unreachable".into())));

        let report = run_copilot(&gen, CopilotTool::Mentor, "how to hire?").await;
        assert!(report.markdown.starts_with("## Error"));
        assert!(report.html.contains("<h2>Error</h2>"));
        assert!(report.html.contains("model unreachable"));
        assert!(report.warning.is_some());
    }

    #[tokio::test]
    async fn test_failure_escapes_upstream_markup() {
        let gen = FixedGenerator(Err(Error::Inference(
            "API error 502: <html><body>Bad Gateway</body></html>".into(),
        )));

        let report = run_copilot(&gen, CopilotTool::Market, "a b2b saas").await;
        assert!(!report.html.contains("<body>"));
        assert!(report.html.contains("&lt;body&gt;"));
    }
}
