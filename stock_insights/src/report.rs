//! The export record handed to renderers.
//!
//! Every cell is preformatted text so JSON consumers and the text preview
//! show the same values.

use indicator_engine::{IndicatorRow, IndicatorTable};
use market_data::models::{
    bar::{Bar, OhlcvSeries},
    tz::ExchangeTz,
};
use serde::Serialize;

use crate::{
    format::{format_date, format_indicator, format_price, format_quote, format_volume},
    narrative::emphasis::{NarrativeLine, parse_narrative},
};

/// Exchange label used when the provider did not name one.
pub const UNKNOWN_EXCHANGE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl PriceRow {
    pub fn from_bar(bar: &Bar, tz: ExchangeTz) -> Self {
        Self {
            date: format_date(bar.timestamp, tz),
            open: format_price(bar.open),
            high: format_price(bar.high),
            low: format_price(bar.low),
            close: format_price(bar.close),
            volume: format_volume(bar.volume),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorCells {
    pub date: String,
    pub sma: String,
    pub ema: String,
    pub rsi: String,
    pub macd: String,
    pub macd_signal: String,
    pub bollinger_high: String,
    pub bollinger_low: String,
}

impl IndicatorCells {
    pub fn from_row(row: &IndicatorRow, tz: ExchangeTz, placeholder: &str) -> Self {
        let cell = |v| format_indicator(v, placeholder);
        Self {
            date: format_date(row.timestamp, tz),
            sma: cell(row.sma),
            ema: cell(row.ema),
            rsi: cell(row.rsi),
            macd: cell(row.macd),
            macd_signal: cell(row.macd_signal),
            bollinger_high: cell(row.bollinger_high),
            bollinger_low: cell(row.bollinger_low),
        }
    }

    /// Formats a whole table, newest row first.
    pub fn newest_first(table: &IndicatorTable, tz: ExchangeTz, placeholder: &str) -> Vec<Self> {
        table
            .newest_first()
            .into_iter()
            .map(|row| Self::from_row(row, tz, placeholder))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub company_name: String,
    pub exchange_label: String,
    pub interval_label: String,
    pub headline: Headline,
    /// Newest first.
    pub prices: Vec<PriceRow>,
    /// Newest first, aligned with `prices`.
    pub indicators: Vec<IndicatorCells>,
    pub news_summary: String,
    pub narrative_text: String,
    pub narrative: Vec<NarrativeLine>,
}

/// Everything a report is assembled from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub company_name: &'a str,
    pub series: &'a OhlcvSeries,
    pub table: &'a IndicatorTable,
    pub news_summary: &'a str,
    pub narrative_text: &'a str,
}

pub fn assemble(input: ReportInput<'_>, placeholder: &str) -> ReportRecord {
    let ReportInput {
        company_name,
        series,
        table,
        news_summary,
        narrative_text,
    } = input;

    let latest = series.latest();
    let tz = series.timezone();
    let company_name = match company_name.trim() {
        "" => series.symbol().to_string(),
        name => name.to_string(),
    };

    ReportRecord {
        company_name,
        exchange_label: series.exchange().unwrap_or(UNKNOWN_EXCHANGE).to_string(),
        interval_label: series.interval().label().to_string(),
        headline: Headline {
            open: format_quote(latest.open),
            close: format_quote(latest.close),
        },
        prices: series
            .newest_first()
            .into_iter()
            .map(|bar| PriceRow::from_bar(bar, tz))
            .collect(),
        indicators: IndicatorCells::newest_first(table, tz, placeholder),
        news_summary: news_summary.to_string(),
        narrative_text: narrative_text.to_string(),
        narrative: parse_narrative(narrative_text),
    }
}
