//! The indicator engine: a pure transform from an OHLCV series to a table of
//! technical indicators.
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use indicator_engine::compute_closes;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let timestamps: Vec<_> = (0..30).map(|i| start + Duration::days(i)).collect();
//! let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
//!
//! let table = compute_closes(&timestamps, &closes).unwrap();
//! assert_eq!(table.len(), 30);
//! assert!(!table.rows()[12].sma.is_defined());
//! assert!(table.rows()[13].sma.is_defined());
//! ```

pub mod error;
pub mod indicators;
pub mod table;
pub mod value;

use chrono::{DateTime, Utc};
use market_data::models::bar::OhlcvSeries;
use tracing::debug;

pub use error::EngineError;
pub use table::{IndicatorRow, IndicatorTable};
pub use value::IndicatorValue;

use indicators::{
    BOLLINGER_PERIOD, BOLLINGER_STD_DEVS, EMA_SPAN, MACD_FAST, MACD_SIGNAL, MACD_SLOW, RSI_PERIOD,
    SMA_PERIOD, bollinger, ema, macd, rsi, sma,
};

/// Computes the fixed indicator set over a loaded series.
pub fn compute(series: &OhlcvSeries) -> Result<IndicatorTable, EngineError> {
    compute_closes(&series.timestamps(), &series.closes())
}

/// Computes the fixed indicator set from parallel timestamp/close slices.
///
/// Fails only on structurally invalid input: no bars, mismatched lengths, or
/// a non-finite close. Short series are fine and simply yield more
/// undefined cells.
pub fn compute_closes(
    timestamps: &[DateTime<Utc>],
    closes: &[f64],
) -> Result<IndicatorTable, EngineError> {
    if closes.is_empty() {
        return Err(EngineError::InvalidInput("series has no bars".into()));
    }
    if timestamps.len() != closes.len() {
        return Err(EngineError::InvalidInput(format!(
            "{} timestamps for {} closes",
            timestamps.len(),
            closes.len()
        )));
    }
    if let Some(i) = closes.iter().position(|c| !c.is_finite()) {
        return Err(EngineError::InvalidInput(format!(
            "close at index {i} is not finite"
        )));
    }

    let sma = sma(closes, SMA_PERIOD);
    let ema = ema(closes, EMA_SPAN);
    let rsi = rsi(closes, RSI_PERIOD);
    let macd = macd(closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
    let bands = bollinger(closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEVS);

    let rows: Vec<IndicatorRow> = timestamps
        .iter()
        .enumerate()
        .map(|(i, &timestamp)| IndicatorRow {
            timestamp,
            sma: sma[i],
            ema: ema[i],
            rsi: rsi[i],
            macd: macd.macd[i],
            macd_signal: macd.signal[i],
            bollinger_high: bands.high[i],
            bollinger_low: bands.low[i],
            bollinger_mid: bands.mid[i],
        })
        .collect();

    debug!(bars = rows.len(), "computed indicator table");
    Ok(IndicatorTable::new(rows))
}
