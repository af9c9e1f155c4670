use serde::{Deserialize, Serialize};

use crate::models::interval::{IntervalClass, IntervalWindow};

/// Provider-agnostic parameters for one bar request.
///
/// The interval class is passed through as-is; each provider translates its
/// [`IntervalWindow`] into whatever range/granularity vocabulary its API uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarsRequest {
    /// Symbol to request (e.g. `"AAPL"`), already trimmed and upper-cased.
    pub symbol: String,

    pub interval: IntervalClass,
}

impl BarsRequest {
    pub fn new(symbol: impl Into<String>, interval: IntervalClass) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
        }
    }

    pub fn window(&self) -> IntervalWindow {
        self.interval.window()
    }
}

/// Whether `symbol` can stand alone as one URL path segment.
///
/// Tickers use letters, digits and a little punctuation (`BRK-B`, `^GSPC`,
/// `RELIANCE.NS`, `EURUSD=X`). Anything that would end the segment, start a
/// query or fragment, or begin a percent escape is refused, as is whitespace.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '/' | '\\' | '?' | '#' | '%')
        })
}
