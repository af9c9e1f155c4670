//! Relative Strength Index.

use crate::value::IndicatorValue;

/// RSI over the trailing `period` close-to-close changes.
///
/// The first change exists at index 1, so the first value appears at index
/// `period`. A window without losses reads 100.
pub fn rsi(closes: &[f64], period: usize) -> Vec<IndicatorValue> {
    (0..closes.len())
        .map(|i| {
            if period == 0 || i < period {
                return IndicatorValue::Undefined;
            }

            let (mut gains, mut losses) = (0.0, 0.0);
            for j in i + 1 - period..=i {
                let delta = closes[j] - closes[j - 1];
                if delta > 0.0 {
                    gains += delta;
                } else {
                    losses -= delta;
                }
            }

            let avg_gain = gains / period as f64;
            let avg_loss = losses / period as f64;
            if avg_loss == 0.0 {
                return IndicatorValue::Defined(100.0);
            }
            let rs = avg_gain / avg_loss;
            IndicatorValue::from_f64(100.0 - 100.0 / (1.0 + rs))
        })
        .collect()
}
