//! Simple Moving Average.

use crate::value::IndicatorValue;

/// Mean of the trailing `period` closes; undefined before index `period - 1`.
///
/// Each window is averaged from scratch, so no rounding carries between rows.
pub fn sma(closes: &[f64], period: usize) -> Vec<IndicatorValue> {
    (0..closes.len())
        .map(|i| match trailing_window(closes, i, period) {
            Some(window) => IndicatorValue::from_f64(window_mean(window)),
            None => IndicatorValue::Undefined,
        })
        .collect()
}

/// Mean taken as deviations from the first value, so a flat window returns
/// its value bit for bit instead of a summed-then-divided approximation.
pub(crate) fn window_mean(window: &[f64]) -> f64 {
    match window.first() {
        Some(&pivot) => {
            pivot + window.iter().map(|x| x - pivot).sum::<f64>() / window.len() as f64
        }
        None => f64::NAN,
    }
}

/// The `period` values ending at index `end`, if that much history exists.
pub(crate) fn trailing_window(values: &[f64], end: usize, period: usize) -> Option<&[f64]> {
    if period == 0 || end + 1 < period || end >= values.len() {
        return None;
    }
    Some(&values[end + 1 - period..=end])
}
