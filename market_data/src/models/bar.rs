//! Canonical in-memory representation of an OHLCV series.
//!
//! Providers hand back loosely-typed columnar data; the loader turns it into
//! [`Bar`]s and seals them inside an [`OhlcvSeries`], which checks the series
//! invariants once at construction and exposes read-only accessors afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{interval::IntervalClass, timeframe::Timeframe, tz::ExchangeTz};

/// A single sampled period of trading activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Start of the period (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the period.
    pub high: f64,

    /// Lowest price during the period.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the period.
    pub volume: u64,
}

/// Reasons a set of bars cannot form a series.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("series has no bars")]
    Empty,

    #[error("bar {index} at {timestamp} is not after the previous bar")]
    NonIncreasing {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("bar {index} has invalid {field} price {value}")]
    InvalidPrice {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// An ordered, non-empty sequence of bars for one symbol.
///
/// Bars are stored oldest-to-newest with strictly increasing timestamps and
/// positive finite prices. The series cannot be modified after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcvSeries {
    symbol: String,
    interval: IntervalClass,
    exchange: Option<String>,
    currency: Option<String>,
    timezone: ExchangeTz,
    bars: Vec<Bar>,
}

impl OhlcvSeries {
    pub fn new(
        symbol: impl Into<String>,
        interval: IntervalClass,
        bars: Vec<Bar>,
    ) -> Result<Self, SeriesError> {
        validate(&bars)?;
        Ok(Self {
            symbol: symbol.into(),
            interval,
            exchange: None,
            currency: None,
            timezone: ExchangeTz::default(),
            bars,
        })
    }

    pub fn with_exchange(mut self, exchange: Option<String>) -> Self {
        self.exchange = exchange;
        self
    }

    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_timezone(mut self, timezone: ExchangeTz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> IntervalClass {
        self.interval
    }

    /// Sampling period of every bar in the series.
    pub fn timeframe(&self) -> Timeframe {
        self.interval.window().sampling
    }

    /// Exchange label reported by the provider, if any.
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Exchange zone; UTC unless the provider named one.
    pub fn timezone(&self) -> ExchangeTz {
        self.timezone
    }

    /// Calendar date of `at` at the exchange.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        self.timezone.local_date(at)
    }

    /// Bars in chronological order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar.
    pub fn latest(&self) -> &Bar {
        // validate() guarantees at least one bar
        &self.bars[self.bars.len() - 1]
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Bars sorted by timestamp, newest first, for display.
    pub fn newest_first(&self) -> Vec<&Bar> {
        let mut bars: Vec<&Bar> = self.bars.iter().collect();
        bars.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        bars
    }
}

fn validate(bars: &[Bar]) -> Result<(), SeriesError> {
    if bars.is_empty() {
        return Err(SeriesError::Empty);
    }

    for (index, bar) in bars.iter().enumerate() {
        for (field, value) in [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SeriesError::InvalidPrice {
                    index,
                    field,
                    value,
                });
            }
        }

        if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
            return Err(SeriesError::NonIncreasing {
                index,
                timestamp: bar.timestamp,
            });
        }
    }

    Ok(())
}
