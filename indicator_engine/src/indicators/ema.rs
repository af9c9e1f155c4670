//! Exponential Moving Average.

use crate::value::IndicatorValue;

/// EMA with smoothing factor `2 / (span + 1)`, seeded with the first value.
///
/// `e[0] = x[0]`, `e[i] = α·x[i] + (1 − α)·e[i−1]`. Defined at every index.
pub fn ema(values: &[f64], span: usize) -> Vec<IndicatorValue> {
    ema_values(values, span)
        .into_iter()
        .map(IndicatorValue::from_f64)
        .collect()
}

/// The raw EMA scan, for callers that feed it into further arithmetic.
pub fn ema_values(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut acc: Option<f64> = None;
    for &x in values {
        let next = match acc {
            None => x,
            Some(prev) => alpha * x + (1.0 - alpha) * prev,
        };
        acc = Some(next);
        out.push(next);
    }
    out
}
