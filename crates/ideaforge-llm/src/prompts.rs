//! Fixed prompt templates for the generation pipeline.

/// Prompt demanding the `Name:` / `Tagline:` / `Tech Stack:` format the
/// response parser expects.
pub fn suggestion_prompt(idea: &str) -> String {
    format!(
        "Generate a startup name, tagline, and short tech stack for this idea:\n\
         {}\n\n\
         Return strictly in this format:\n\
         Name: <name>\n\
         Tagline: <tagline>\n\
         Tech Stack: <comma-separated list>",
        idea
    )
}

/// Prompt demanding a single short category label.
pub fn label_prompt(idea: &str) -> String {
    format!(
        "Analyze the following startup idea and assign a concise category label \
         (like FinTech, EdTech, AI/ML, HealthTech, E-commerce, GreenTech, Social Media, etc).\n\
         Idea: {}\n\n\
         Return only one short label (1-2 words), nothing else.",
        idea
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_idea() {
        let prompt = suggestion_prompt("robot baristas");
        assert!(prompt.contains("robot baristas"));
        assert!(prompt.contains("Tech Stack: <comma-separated list>"));

        let prompt = label_prompt("robot baristas");
        assert!(prompt.contains("robot baristas"));
        assert!(prompt.contains("one short label"));
    }
}
