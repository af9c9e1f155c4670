//! Sampling period of a bar series.
//!
//! A [`Timeframe`] pairs a non-zero amount with a [`TimeframeUnit`] so that the
//! interval table can say "3-month bars" instead of passing around ad-hoc
//! `(u32, &str)` tuples.
//!
//! ```
//! use market_data::models::timeframe::{Timeframe, TimeframeUnit};
//!
//! let tf: Timeframe = "3M".parse().unwrap();
//! assert_eq!(tf.amount().get(), 3);
//! assert_eq!(tf.unit(), TimeframeUnit::Month);
//! assert_eq!(tf.to_string(), "3M");
//! ```

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeframeError {
    #[error("empty timeframe")]
    Empty,

    #[error("invalid timeframe amount in '{0}'")]
    InvalidAmount(String),

    #[error("unknown timeframe unit: {0}")]
    UnknownUnit(String),
}

/// Timeframe granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeframeUnit {
    Day,
    Week,
    Month,
}

/// A timeframe = amount × unit (e.g., 1-Day, 1-Week, 3-Month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeframe {
    amount: NonZeroU32,
    unit: TimeframeUnit,
}

impl Timeframe {
    pub const fn new(amount: NonZeroU32, unit: TimeframeUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn amount(&self) -> NonZeroU32 {
        self.amount
    }

    pub const fn unit(&self) -> TimeframeUnit {
        self.unit
    }
}

/// Display/parse for CLI ergonomics (`"1D"`, `"1W"`, `"3M"`).
impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = match self.unit {
            TimeframeUnit::Day => "D",
            TimeframeUnit::Week => "W",
            TimeframeUnit::Month => "M",
        };
        write!(f, "{}{u}", self.amount.get())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(last) = s.chars().last() else {
            return Err(TimeframeError::Empty);
        };
        let (digits, unit) = s.split_at(s.len() - last.len_utf8());
        let amount = digits
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| TimeframeError::InvalidAmount(s.to_string()))?;
        let unit = match unit {
            "D" => TimeframeUnit::Day,
            "W" => TimeframeUnit::Week,
            "M" => TimeframeUnit::Month,
            other => return Err(TimeframeError::UnknownUnit(other.to_string())),
        };
        Ok(Timeframe::new(amount, unit))
    }
}
