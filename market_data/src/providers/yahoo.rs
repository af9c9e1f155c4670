//! Yahoo Finance REST provider (chart + search endpoints).

mod chart;
mod news;
pub mod params;
pub mod response;

use reqwest::{Client, header};
use snafu::ResultExt;

use crate::providers::{ClientBuildSnafu, InvalidUserAgentSnafu, ProviderInitError};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo rejects requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stock-insights/0.1";

/// Talks to the public Yahoo Finance JSON API.
///
/// One HTTP client is shared by the chart ([`DataProvider`]) and search
/// ([`NewsProvider`]) implementations.
///
/// [`DataProvider`]: crate::providers::DataProvider
/// [`NewsProvider`]: crate::providers::NewsProvider
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Creates a provider against `base_url` (no trailing slash needed).
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(user_agent).context(InvalidUserAgentSnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Provider against the public endpoint with the default user agent.
    pub fn with_defaults() -> Result<Self, ProviderInitError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
