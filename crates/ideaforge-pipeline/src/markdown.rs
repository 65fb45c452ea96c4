//! Markdown-to-HTML rendering for copilot reports.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML fragment. Tables and standard list syntax are
/// supported. Empty input returns empty output.
pub fn render(md_text: &str) -> String {
    if md_text.is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(md_text, options);

    let mut out = String::with_capacity(md_text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Fallback when markdown conversion is not an option: escape the raw text
/// and wrap it in a whitespace-preserving block. Always safe to embed.
pub fn render_preformatted(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!(
        "<pre style=\"white-space:pre-wrap\">{}</pre>",
        escape_html(text)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
