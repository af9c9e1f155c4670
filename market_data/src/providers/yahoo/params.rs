//! Translation of interval windows into Yahoo's `range`/`interval` vocabulary.

use crate::models::{
    interval::{IntervalWindow, Lookback},
    request_params::BarsRequest,
    timeframe::{Timeframe, TimeframeUnit},
};
use crate::providers::{ApiSnafu, ProviderError};

/// Yahoo `range` parameter for a lookback.
pub fn range_param(lookback: Lookback) -> Result<String, ProviderError> {
    match lookback {
        Lookback::Max => Ok("max".to_string()),
        Lookback::Months(n @ (1 | 3 | 6)) => Ok(format!("{n}mo")),
        Lookback::Years(n @ (1 | 2 | 5 | 10)) => Ok(format!("{n}y")),
        other => ApiSnafu {
            message: format!("Yahoo has no range for {other:?}"),
        }
        .fail(),
    }
}

/// Yahoo `interval` parameter for a sampling period.
///
/// Yahoo only serves a fixed set of granularities; anything else is rejected
/// before a request is made.
pub fn interval_param(tf: &Timeframe) -> Result<&'static str, ProviderError> {
    match (tf.unit(), tf.amount().get()) {
        (TimeframeUnit::Day, 1) => Ok("1d"),
        (TimeframeUnit::Day, 5) => Ok("5d"),
        (TimeframeUnit::Week, 1) => Ok("1wk"),
        (TimeframeUnit::Month, 1) => Ok("1mo"),
        (TimeframeUnit::Month, 3) => Ok("3mo"),
        _ => ApiSnafu {
            message: format!("Yahoo does not serve {tf} bars"),
        }
        .fail(),
    }
}

/// Query string for the chart endpoint.
pub fn construct_params(request: &BarsRequest) -> Result<Vec<(String, String)>, ProviderError> {
    let IntervalWindow { lookback, sampling } = request.window();
    Ok(vec![
        ("range".to_string(), range_param(lookback)?),
        ("interval".to_string(), interval_param(&sampling)?.to_string()),
        ("includePrePost".to_string(), "false".to_string()),
        ("events".to_string(), "div,split".to_string()),
    ])
}
