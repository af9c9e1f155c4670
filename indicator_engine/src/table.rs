use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value::IndicatorValue;

/// Derived values aligned to one bar's timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub sma: IndicatorValue,
    pub ema: IndicatorValue,
    pub rsi: IndicatorValue,
    pub macd: IndicatorValue,
    pub macd_signal: IndicatorValue,
    pub bollinger_high: IndicatorValue,
    pub bollinger_low: IndicatorValue,
    #[serde(skip)]
    pub(crate) bollinger_mid: IndicatorValue,
}

/// One [`IndicatorRow`] per input bar, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndicatorTable {
    rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    pub(crate) fn new(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    /// Rows oldest to newest, index-aligned with the source series.
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&IndicatorRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// Rows sorted by timestamp, newest first, for display.
    pub fn newest_first(&self) -> Vec<&IndicatorRow> {
        let mut rows: Vec<&IndicatorRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        rows
    }
}
