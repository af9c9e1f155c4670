//! Splits model output into headings and body lines.
//!
//! Models mark emphasis with markdown asterisks. Bold markers (`**`) are
//! dropped; a line wrapped in single asterisks is treated as a heading.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum NarrativeLine {
    Heading(String),
    Body(String),
}

impl NarrativeLine {
    pub fn text(&self) -> &str {
        match self {
            NarrativeLine::Heading(text) | NarrativeLine::Body(text) => text,
        }
    }
}

/// Parses narrative text line by line. Blank lines are skipped.
pub fn parse_narrative(text: &str) -> Vec<NarrativeLine> {
    text.replace("**", "")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.len() > 1 && line.starts_with('*') && line.ends_with('*') {
                NarrativeLine::Heading(line.trim_matches('*').trim().to_string())
            } else {
                NarrativeLine::Body(line.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_is_stripped_and_wrapped_lines_become_headings() {
        let lines = parse_narrative(
            "**Company Overview**\n*Recommendation*\n\n  * Buy on dips, RSI is **54**\nplain text\n*",
        );
        assert_eq!(
            lines,
            vec![
                NarrativeLine::Body("Company Overview".into()),
                NarrativeLine::Heading("Recommendation".into()),
                NarrativeLine::Body("* Buy on dips, RSI is 54".into()),
                NarrativeLine::Body("plain text".into()),
                NarrativeLine::Body("*".into()),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(parse_narrative("").is_empty());
        assert!(parse_narrative("\n  \n").is_empty());
    }

    #[test]
    fn serializes_as_kind_and_text() {
        let json = serde_json::to_string(&NarrativeLine::Heading("Outlook".into())).unwrap();
        assert_eq!(json, r#"{"kind":"heading","text":"Outlook"}"#);
    }
}
