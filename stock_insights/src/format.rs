//! Cell formatting shared by the export record and the text preview.

use chrono::{DateTime, Utc};
use indicator_engine::IndicatorValue;
use market_data::models::tz::ExchangeTz;

/// `YYYY-MM-DD` on the exchange's calendar.
pub fn format_date(at: DateTime<Utc>, tz: ExchangeTz) -> String {
    tz.local_date(at).format("%Y-%m-%d").to_string()
}

/// Two decimals, no grouping. Values that round to zero never carry a sign.
pub fn format_price(value: f64) -> String {
    let out = format!("{value:.2}");
    match out.strip_prefix('-') {
        Some(abs) if abs.bytes().all(|b| b == b'0' || b == b'.') => abs.to_string(),
        _ => out,
    }
}

/// Headline quote, e.g. `$123.45`.
pub fn format_quote(value: f64) -> String {
    format!("${}", format_price(value))
}

/// Thousands separated by `,`: `1234567` becomes `1,234,567`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_indicator(value: IndicatorValue, placeholder: &str) -> String {
    match value {
        IndicatorValue::Defined(v) => format_price(v),
        IndicatorValue::Undefined => placeholder.to_string(),
    }
}
