use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single headline about a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub publisher: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}
