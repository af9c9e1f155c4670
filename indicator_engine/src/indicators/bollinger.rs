//! Bollinger Bands.

use super::sma::{sma, trailing_window};
use crate::value::IndicatorValue;

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub mid: Vec<IndicatorValue>,
    pub high: Vec<IndicatorValue>,
    pub low: Vec<IndicatorValue>,
}

/// SMA(`period`) ± `std_devs` × the sample standard deviation of the same
/// trailing window (divisor `period − 1`).
pub fn bollinger(closes: &[f64], period: usize, std_devs: f64) -> BollingerSeries {
    let mid = sma(closes, period);
    let mut high = Vec::with_capacity(closes.len());
    let mut low = Vec::with_capacity(closes.len());

    for (i, m) in mid.iter().enumerate() {
        let band = match (m.value(), trailing_window(closes, i, period)) {
            (Some(mean), Some(window)) if period > 1 => {
                let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
                    / (period - 1) as f64;
                Some((mean, std_devs * variance.sqrt()))
            }
            _ => None,
        };

        match band {
            Some((mean, width)) => {
                high.push(IndicatorValue::from_f64(mean + width));
                low.push(IndicatorValue::from_f64(mean - width));
            }
            None => {
                high.push(IndicatorValue::Undefined);
                low.push(IndicatorValue::Undefined);
            }
        }
    }

    BollingerSeries { mid, high, low }
}
