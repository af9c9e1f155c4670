//! Provider abstraction for market data sources.
//!
//! [`DataProvider`] is the single seam through which the loader obtains raw
//! bars, and [`NewsProvider`] the one through which headlines arrive. Both are
//! async and object-safe so the caller can pick a concrete vendor at runtime
//! (`Box<dyn DataProvider>`), and tests can swap in a canned implementation.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data::models::request_params::BarsRequest;
//! use market_data::providers::{DataProvider, ProviderError, RawBars};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_bars(&self, request: &BarsRequest) -> Result<RawBars, ProviderError> {
//!         Ok(RawBars::empty(&request.symbol))
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snafu::{Backtrace, Snafu};

use crate::models::{news::NewsItem, request_params::BarsRequest, tz::ExchangeTz};

/// Trait for fetching raw bar data from a market data provider.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches every bar the provider has for the request's lookback window.
    ///
    /// Implementations must report an unknown symbol as
    /// [`ProviderError::NotFound`] rather than as an empty success.
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<RawBars, ProviderError>;
}

/// Trait for fetching recent headlines about a symbol.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsItem>, ProviderError>;
}

/// Bars as the provider delivered them, before normalization.
///
/// Any cell may be missing; samples are in provider order, which is usually but
/// not necessarily chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBars {
    pub symbol: String,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    /// Zone whose calendar the bars are dated in.
    pub timezone: ExchangeTz,
    pub samples: Vec<RawSample>,
}

impl RawBars {
    pub fn empty(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            exchange: None,
            currency: None,
            timezone: ExchangeTz::default(),
            samples: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// User agent contains characters that cannot go into a header.
    #[snafu(display("Invalid user agent: {source}"))]
    InvalidUserAgent {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a provider implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// The provider does not know the requested symbol.
    #[snafu(display("Symbol not found: {symbol}"))]
    NotFound { symbol: String, backtrace: Backtrace },

    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Request {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned an error status or error payload.
    #[snafu(display("API error: {message}"))]
    Api { message: String, backtrace: Backtrace },

    /// The response body did not have the expected shape.
    #[snafu(display("Failed to decode provider response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },
}
