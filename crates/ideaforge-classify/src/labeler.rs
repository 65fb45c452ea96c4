//! Keyword label heuristic.

/// Assign a category label to free text. Deterministic and total:
/// case-insensitive substring rules, first match wins, `General` otherwise.
pub fn assign_label(text: &str) -> &'static str {
    let text = text.to_lowercase();
    if text.contains("ai") || text.contains("machine learning") {
        "AI/ML"
    } else if text.contains("finance") || text.contains("payment") {
        "FinTech"
    } else if text.contains("health") || text.contains("medical") {
        "HealthTech"
    } else if text.contains("education") || text.contains("learning") {
        "EdTech"
    } else {
        "General"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_rules() {
        assert_eq!(assign_label("An AI assistant for lawyers"), "AI/ML");
        assert_eq!(assign_label("machine learning for farms"), "AI/ML");
        assert_eq!(assign_label("Payment rails for freelancers"), "FinTech");
        assert_eq!(assign_label("Medical records on your phone"), "HealthTech");
        assert_eq!(assign_label("Education marketplace"), "EdTech");
        assert_eq!(assign_label("A dog walking service"), "General");
    }

    #[test]
    fn test_first_match_wins() {
        // "ai" appears before the education rule is consulted
        assert_eq!(
            assign_label("AI-powered tutoring platform for kids"),
            "AI/ML"
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(assign_label("FINANCE for everyone"), "FinTech");
    }

    #[test]
    fn test_total_on_degenerate_input() {
        assert_eq!(assign_label(""), "General");
        assert_eq!(assign_label("   \n\t"), "General");
        let labels = ["AI/ML", "FinTech", "HealthTech", "EdTech", "General"];
        for input in ["x", "🚀", "health AND finance", &"a".repeat(10_000)] {
            assert!(labels.contains(&assign_label(input)));
        }
    }
}
