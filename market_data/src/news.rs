//! Flattening headlines into the free-text summary the report carries.

use std::fmt::Write;

use crate::models::news::NewsItem;

pub const NO_NEWS: &str = "No recent news found.";

/// One bullet per headline: `- {title} ({publisher}, {YYYY-MM-DD})`.
///
/// Publisher and date are omitted individually when the provider did not
/// supply them.
pub fn summarize_news(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return NO_NEWS.to_string();
    }

    let mut out = String::new();
    for item in items {
        let mut attribution: Vec<String> = Vec::with_capacity(2);
        if let Some(publisher) = item.publisher.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            attribution.push(publisher.to_string());
        }
        if let Some(at) = item.published_at {
            attribution.push(at.format("%Y-%m-%d").to_string());
        }

        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "- {}", item.title.trim());
        if !attribution.is_empty() {
            let _ = write!(out, " ({})", attribution.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn item(title: &str, publisher: Option<&str>, day: Option<u32>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            publisher: publisher.map(str::to_string),
            link: None,
            published_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(summarize_news(&[]), NO_NEWS);
    }

    #[test]
    fn bullets_carry_available_attribution() {
        let summary = summarize_news(&[
            item("Apple beats estimates ", Some("Reuters"), Some(2)),
            item("Supplier update", None, Some(3)),
            item("Analyst note", Some(" "), None),
        ]);
        assert_eq!(
            summary,
            "- Apple beats estimates (Reuters, 2024-05-02)\n- Supplier update (2024-05-03)\n- Analyst note"
        );
    }
}
