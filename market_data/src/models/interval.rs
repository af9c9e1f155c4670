//! Interval classes and their fixed lookback/sampling table.
//!
//! The user picks a coarse display resolution; each class maps to exactly one
//! `(lookback, sampling period)` pair. The table trades resolution for a
//! compact report: long lookbacks use quarterly bars so the price table stays
//! readable.

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::timeframe::{Timeframe, TimeframeUnit};

const ONE: NonZeroU32 = NonZeroU32::MIN;
const THREE: NonZeroU32 = match NonZeroU32::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interval class '{0}' (expected daily, weekly, monthly, yearly or max)")]
pub struct UnknownIntervalClass(pub String);

/// Coarse display-resolution selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalClass {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Max,
}

/// How far back a request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookback {
    Months(u32),
    Years(u32),
    /// Everything the provider has.
    Max,
}

/// The `(lookback, sampling period)` pair an [`IntervalClass`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalWindow {
    pub lookback: Lookback,
    pub sampling: Timeframe,
}

impl IntervalClass {
    pub const ALL: [IntervalClass; 5] = [
        IntervalClass::Daily,
        IntervalClass::Weekly,
        IntervalClass::Monthly,
        IntervalClass::Yearly,
        IntervalClass::Max,
    ];

    pub const fn window(self) -> IntervalWindow {
        let (lookback, sampling) = match self {
            IntervalClass::Daily => (Lookback::Months(1), Timeframe::new(ONE, TimeframeUnit::Day)),
            IntervalClass::Weekly => {
                (Lookback::Months(6), Timeframe::new(ONE, TimeframeUnit::Week))
            }
            IntervalClass::Monthly => {
                (Lookback::Years(1), Timeframe::new(ONE, TimeframeUnit::Month))
            }
            IntervalClass::Yearly => {
                (Lookback::Years(10), Timeframe::new(THREE, TimeframeUnit::Month))
            }
            IntervalClass::Max => (Lookback::Max, Timeframe::new(THREE, TimeframeUnit::Month)),
        };
        IntervalWindow { lookback, sampling }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IntervalClass::Daily => "Daily",
            IntervalClass::Weekly => "Weekly",
            IntervalClass::Monthly => "Monthly",
            IntervalClass::Yearly => "Yearly",
            IntervalClass::Max => "Max",
        }
    }
}

impl fmt::Display for IntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IntervalClass {
    type Err = UnknownIntervalClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IntervalClass::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownIntervalClass(s.to_string()))
    }
}
