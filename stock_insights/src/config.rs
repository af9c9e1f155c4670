//! Application configuration: parsing, normalization, and loading.
//!
//! The configuration is a small TOML document with three tables:
//!
//! ```toml
//! [market_data]
//! base_url = "https://query1.finance.yahoo.com"
//! news_count = 5
//!
//! [narrative]
//! enabled = true
//! model = "llama-3.3-70b-versatile"
//! api_key_env = "GROQ_API_KEY"
//!
//! [report]
//! undefined_placeholder = "-"
//! ```
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration. Secrets never live here: the narrative table names the
//! environment variable that holds the API key.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_config_str`]
//! - Parse + normalize from a file path: [`load_config_path`]

use anyhow::{Context, bail};
use market_data::providers::yahoo::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NARRATIVE_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_NARRATIVE_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Upper bound the search endpoint honours for `newsCount`.
const MAX_NEWS_COUNT: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct InsightsConfig {
    pub market_data: MarketDataCfg,
    pub narrative: NarrativeCfg,
    pub report: ReportCfg,
}

/// Where bars and headlines come from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct MarketDataCfg {
    pub base_url: String,
    pub user_agent: String,
    /// Whether to fetch headlines at all.
    pub news_enabled: bool,
    /// How many headlines go into the summary.
    pub news_count: u32,
}

impl Default for MarketDataCfg {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            news_enabled: true,
            news_count: 5,
        }
    }
}

/// The hosted chat-completions endpoint that writes the commentary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct NarrativeCfg {
    pub enabled: bool,
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the bearer token.
    pub api_key_env: String,
    pub temperature: Option<f32>,
}

impl Default for NarrativeCfg {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_NARRATIVE_BASE_URL.to_string(),
            model: DEFAULT_NARRATIVE_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReportCfg {
    /// Text shown in indicator cells whose window lacks history.
    pub undefined_placeholder: String,
    /// Newest indicator rows quoted in the narrative prompt.
    pub prompt_rows: usize,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            undefined_placeholder: "-".to_string(),
            prompt_rows: 30,
        }
    }
}

/// Normalize a configuration in place.
///
/// What normalization does:
/// - Trim every URL, user agent, model and env var name; strip trailing `/` from URLs
/// - Require URLs to be `http(s)://`
/// - Require a non-empty model and key variable when the narrative is enabled
/// - Require `1..=50` headlines when news is enabled
pub fn normalize_config(cfg: &mut InsightsConfig) -> anyhow::Result<()> {
    let md = &mut cfg.market_data;
    md.base_url = normalize_url(&md.base_url).context("market_data.base_url")?;
    md.user_agent = md.user_agent.trim().to_string();
    if md.user_agent.is_empty() {
        bail!("market_data.user_agent cannot be empty");
    }
    if md.news_enabled && !(1..=MAX_NEWS_COUNT).contains(&md.news_count) {
        bail!(
            "market_data.news_count must be between 1 and {MAX_NEWS_COUNT}, got {}",
            md.news_count
        );
    }

    let nr = &mut cfg.narrative;
    nr.base_url = normalize_url(&nr.base_url).context("narrative.base_url")?;
    nr.model = nr.model.trim().to_string();
    nr.api_key_env = nr.api_key_env.trim().to_string();
    if nr.enabled {
        if nr.model.is_empty() {
            bail!("narrative.model cannot be empty when the narrative is enabled");
        }
        if nr.api_key_env.is_empty() {
            bail!("narrative.api_key_env cannot be empty when the narrative is enabled");
        }
    }
    if let Some(t) = nr.temperature
        && !(0.0..=2.0).contains(&t)
    {
        bail!("narrative.temperature must be between 0 and 2, got {t}");
    }

    Ok(())
}

fn normalize_url(raw: &str) -> anyhow::Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        bail!("url cannot be empty");
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("url must start with http:// or https://, got '{url}'");
    }
    Ok(url.to_string())
}

/// Parse and normalize a configuration from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<InsightsConfig> {
    let mut cfg: InsightsConfig =
        toml::from_str(toml_str).context("failed to parse configuration TOML")?;
    normalize_config(&mut cfg).context("invalid configuration")?;
    Ok(cfg)
}

/// Read a configuration file from disk, parse, and normalize it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<InsightsConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read configuration file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
