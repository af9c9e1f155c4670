//! MACD (Moving Average Convergence Divergence).

use super::ema::ema_values;
use crate::value::IndicatorValue;

/// MACD line and its signal line, aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<IndicatorValue>,
    pub signal: Vec<IndicatorValue>,
}

/// `EMA(fast) − EMA(slow)` and an EMA(`signal`) of that difference.
///
/// Both lines are defined from index 0, because each EMA is seeded with its
/// first input; early values carry little information until the slow EMA has
/// seen `slow` bars.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema_values(closes, fast);
    let slow_ema = ema_values(closes, slow);
    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema_values(&line, signal);

    MacdSeries {
        macd: line.into_iter().map(IndicatorValue::from_f64).collect(),
        signal: signal_line.into_iter().map(IndicatorValue::from_f64).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_series_has_flat_zero_lines() {
        let out = macd(&[50.0; 30], 12, 26, 9);
        let near_zero = |v: &IndicatorValue| v.value().is_some_and(|x| x.abs() < 1e-9);
        assert!(out.macd.iter().all(near_zero));
        assert!(out.signal.iter().all(near_zero));
    }

    #[test]
    fn rising_series_has_positive_macd() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert_eq!(out.macd[0], IndicatorValue::Defined(0.0));
        assert!(out.macd[39].value().unwrap() > 0.0);
        // the signal lags the line on a steady trend
        assert!(out.signal[39].value().unwrap() < out.macd[39].value().unwrap());
    }
}
