//! Per-indicator scans over a close-price slice.
//!
//! Every function takes closes ordered oldest to newest and returns one
//! [`IndicatorValue`] per input position. Position `i` only ever reads
//! `closes[..=i]`, so appending bars never changes earlier outputs.
//!
//! # Supported Indicators
//! - **SMA** - trailing arithmetic mean
//! - **EMA** - exponentially weighted mean seeded with the first close
//! - **RSI** - mean gain / mean loss oscillator bounded to [0, 100]
//! - **MACD** - fast EMA minus slow EMA, plus an EMA signal line
//! - **Bollinger Bands** - SMA ± k sample standard deviations
//!
//! [`IndicatorValue`]: crate::value::IndicatorValue

mod bollinger;
mod ema;
mod macd;
mod rsi;
mod sma;

pub use bollinger::{BollingerSeries, bollinger};
pub use ema::{ema, ema_values};
pub use macd::{MacdSeries, macd};
pub use rsi::rsi;
pub use sma::sma;

pub const SMA_PERIOD: usize = 14;
pub const EMA_SPAN: usize = 14;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEVS: f64 = 2.0;
