//! The series loader: provider call, normalization, validation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use snafu::{ResultExt, ensure};
use tracing::{debug, warn};

use crate::{
    errors::{EmptySeriesSnafu, InvalidSeriesSnafu, LoadError, NotFoundSnafu, ProviderSnafu},
    models::{
        bar::{Bar, OhlcvSeries},
        interval::IntervalClass,
        request_params::{BarsRequest, is_valid_symbol},
    },
    providers::{DataProvider, ProviderError, RawSample},
};

/// Loads the OHLCV series for `company_identifier` at the given interval class.
///
/// Makes exactly one provider call and never retries. A blank identifier fails
/// with [`LoadError::NotFound`] without touching the provider.
pub async fn load(
    provider: &dyn DataProvider,
    company_identifier: &str,
    interval: IntervalClass,
) -> Result<OhlcvSeries, LoadError> {
    let result = load_inner(provider, company_identifier, interval).await;
    match &result {
        Ok(series) => debug!(
            symbol = series.symbol(),
            %interval,
            bars = series.len(),
            "loaded series"
        ),
        Err(err) => warn!(
            symbol = err.symbol(),
            %interval,
            reason = ?err.reason(),
            error = %err,
            "failed to load series"
        ),
    }
    result
}

async fn load_inner(
    provider: &dyn DataProvider,
    company_identifier: &str,
    interval: IntervalClass,
) -> Result<OhlcvSeries, LoadError> {
    let symbol = company_identifier.trim().to_uppercase();
    // No ticker contains URL path or query syntax.
    ensure!(is_valid_symbol(&symbol), NotFoundSnafu { symbol });

    let request = BarsRequest::new(symbol.as_str(), interval);
    let raw = match provider.fetch_bars(&request).await {
        Ok(raw) => raw,
        Err(ProviderError::NotFound { .. }) => return NotFoundSnafu { symbol }.fail(),
        Err(err) => return Err(err).context(ProviderSnafu { symbol }),
    };

    let bars = normalize_samples(raw.samples);
    ensure!(!bars.is_empty(), EmptySeriesSnafu { symbol });

    let series = OhlcvSeries::new(symbol.as_str(), interval, bars)
        .context(InvalidSeriesSnafu { symbol: symbol.as_str() })?
        .with_exchange(raw.exchange)
        .with_currency(raw.currency)
        .with_timezone(raw.timezone);
    Ok(series)
}

/// Turns provider samples into chronologically ordered bars.
///
/// Samples missing any of open/high/low/close are dropped; a missing volume
/// reads as zero. When two samples share a timestamp the later one in
/// provider order wins.
pub fn normalize_samples(samples: Vec<RawSample>) -> Vec<Bar> {
    let mut by_time: BTreeMap<DateTime<Utc>, Bar> = BTreeMap::new();
    for sample in samples {
        let (Some(open), Some(high), Some(low), Some(close)) =
            (sample.open, sample.high, sample.low, sample.close)
        else {
            continue;
        };
        by_time.insert(
            sample.timestamp,
            Bar {
                timestamp: sample.timestamp,
                open,
                high,
                low,
                close,
                volume: sample.volume.unwrap_or(0),
            },
        );
    }
    by_time.into_values().collect()
}
