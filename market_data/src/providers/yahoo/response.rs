//! Wire shapes of the Yahoo chart and search endpoints.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::{news::NewsItem, tz::ExchangeTz};
use crate::providers::{RawBars, RawSample};

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Deserialize, Debug)]
pub struct ChartBody {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: Option<String>,
}

impl ChartError {
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("Not Found")
    }
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Epoch seconds, one per sample. Absent when the range holds no trades.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    /// IANA name, e.g. `Asia/Kolkata`.
    pub exchange_timezone_name: Option<String>,
    /// Seconds east of UTC at request time.
    pub gmtoffset: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Zips the columnar arrays into samples.
    ///
    /// Timestamps Yahoo cannot express as a UTC instant are skipped; short
    /// columns read as missing cells.
    pub fn into_raw_bars(self, requested_symbol: &str) -> RawBars {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        let cell = |column: &[Option<f64>], i: usize| column.get(i).copied().flatten();

        let samples = self
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &secs)| {
                let timestamp = DateTime::from_timestamp(secs, 0)?;
                Some(RawSample {
                    timestamp,
                    open: cell(&quote.open, i),
                    high: cell(&quote.high, i),
                    low: cell(&quote.low, i),
                    close: cell(&quote.close, i),
                    volume: cell(&quote.volume, i)
                        .filter(|v| v.is_finite())
                        .map(|v| v.max(0.0).round() as u64),
                })
            })
            .collect();

        RawBars {
            symbol: self
                .meta
                .symbol
                .unwrap_or_else(|| requested_symbol.to_string()),
            exchange: self.meta.full_exchange_name.or(self.meta.exchange_name),
            currency: self.meta.currency,
            timezone: ExchangeTz::resolve(
                self.meta.exchange_timezone_name.as_deref(),
                self.meta.gmtoffset,
            ),
            samples,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub news: Vec<SearchNewsItem>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchNewsItem {
    pub title: String,
    pub publisher: Option<String>,
    pub link: Option<String>,
    pub provider_publish_time: Option<i64>,
}

impl From<SearchNewsItem> for NewsItem {
    fn from(item: SearchNewsItem) -> Self {
        NewsItem {
            title: item.title,
            publisher: item.publisher,
            link: item.link,
            published_at: item
                .provider_publish_time
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columnar_payload_with_nulls_becomes_samples() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "AAPL", "currency": "USD", "exchangeName": "NMS", "fullExchangeName": "NasdaqGS"},
                    "timestamp": [1704205800, 1704292200],
                    "indicators": {"quote": [{
                        "open": [187.15, null],
                        "high": [188.44, 185.88],
                        "low": [183.89, 183.43],
                        "close": [185.64, 184.25],
                        "volume": [82488700, null]
                    }]}
                }],
                "error": null
            }
        }"#;

        let env: ChartEnvelope = serde_json::from_str(body).unwrap();
        let result = env.chart.result.unwrap().into_iter().next().unwrap();
        let raw = result.into_raw_bars("aapl");

        assert_eq!(raw.symbol, "AAPL");
        assert_eq!(raw.exchange.as_deref(), Some("NasdaqGS"));
        assert_eq!(raw.currency.as_deref(), Some("USD"));
        assert_eq!(raw.samples.len(), 2);
        assert_eq!(raw.samples[0].volume, Some(82_488_700));
        assert_eq!(raw.samples[1].open, None);
        assert_eq!(raw.samples[1].volume, None);
        assert_eq!(raw.samples[1].timestamp.timestamp(), 1704292200);
        // no zone in the payload
        assert_eq!(raw.timezone, ExchangeTz::default());
    }

    #[test]
    fn exchange_zone_comes_from_meta() {
        let body = r#"{"chart": {"result": [{
            "meta": {"symbol": "RELIANCE.NS", "exchangeTimezoneName": "Asia/Kolkata", "gmtoffset": 19800},
            "timestamp": [1704047400],
            "indicators": {"quote": [{"open": [1.0], "high": [1.0], "low": [1.0], "close": [1.0], "volume": [1]}]}
        }], "error": null}}"#;
        let env: ChartEnvelope = serde_json::from_str(body).unwrap();
        let raw = env.chart.result.unwrap().remove(0).into_raw_bars("RELIANCE.NS");
        assert_eq!(raw.timezone.to_string(), "Asia/Kolkata");

        let body = body.replace("Asia/Kolkata", "");
        let env: ChartEnvelope = serde_json::from_str(&body).unwrap();
        let raw = env.chart.result.unwrap().remove(0).into_raw_bars("RELIANCE.NS");
        assert_eq!(raw.timezone.to_string(), "+05:30");
    }

    #[test]
    fn missing_timestamp_array_means_no_samples() {
        let body = r#"{"chart": {"result": [{"meta": {}, "indicators": {"quote": [{}]}}], "error": null}}"#;
        let env: ChartEnvelope = serde_json::from_str(body).unwrap();
        let raw = env.chart.result.unwrap().remove(0).into_raw_bars("XYZ");
        assert_eq!(raw.symbol, "XYZ");
        assert!(raw.samples.is_empty());
    }
}
