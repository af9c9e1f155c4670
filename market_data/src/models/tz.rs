//! Exchange time zones.
//!
//! Bars are stored as UTC instants, but a bar's calendar date is the date at
//! the exchange. Yahoo stamps daily and longer bars at local midnight, so an
//! exchange east of UTC would otherwise land every bar on the previous day.
//!
//! What this module provides:
//! - [`ExchangeTz`]: an IANA zone (`Asia/Kolkata`) or, when the provider only
//!   reports an offset, a fixed offset.
//! - [`ExchangeTz::resolve`]: pick a zone from a provider's name/offset pair.
//! - [`ExchangeTz::local_date`]: the exchange-local calendar date of an instant.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeTz {
    Named(Tz),
    Offset(FixedOffset),
}

impl Default for ExchangeTz {
    fn default() -> Self {
        ExchangeTz::Named(Tz::UTC)
    }
}

impl ExchangeTz {
    /// Zone from an IANA name, falling back to a UTC offset in seconds, then UTC.
    ///
    /// Example:
    /// - `(Some("Asia/Kolkata"), _)` -> `Named(Asia/Kolkata)`
    /// - `(Some("Mars/Olympus"), Some(19800))` -> `Offset(+05:30)`
    pub fn resolve(name: Option<&str>, utc_offset_secs: Option<i32>) -> Self {
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            match name.parse::<Tz>() {
                Ok(tz) => return ExchangeTz::Named(tz),
                Err(_) => debug!(name, "unknown exchange time zone, trying offset"),
            }
        }
        utc_offset_secs
            .and_then(FixedOffset::east_opt)
            .map(ExchangeTz::Offset)
            .unwrap_or_default()
    }

    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        match self {
            ExchangeTz::Named(tz) => at.with_timezone(tz).date_naive(),
            ExchangeTz::Offset(offset) => at.with_timezone(offset).date_naive(),
        }
    }
}

impl fmt::Display for ExchangeTz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeTz::Named(tz) => f.write_str(tz.name()),
            ExchangeTz::Offset(offset) => write!(f, "{offset}"),
        }
    }
}

impl Serialize for ExchangeTz {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn named_zone_wins_over_offset() {
        let tz = ExchangeTz::resolve(Some("Asia/Kolkata"), Some(0));
        assert_eq!(tz, ExchangeTz::Named(chrono_tz::Asia::Kolkata));
        assert_eq!(tz.to_string(), "Asia/Kolkata");
    }

    #[test]
    fn unknown_name_falls_back_to_offset_then_utc() {
        let tz = ExchangeTz::resolve(Some("Mars/Olympus"), Some(19_800));
        assert_eq!(tz.to_string(), "+05:30");

        assert_eq!(ExchangeTz::resolve(None, None), ExchangeTz::default());
        // beyond ±24h is not an offset
        assert_eq!(ExchangeTz::resolve(Some(""), Some(90_000)), ExchangeTz::default());
    }

    #[test]
    fn local_midnight_east_of_utc_keeps_its_date() {
        // 2024-01-01 00:00 IST
        let at = Utc.timestamp_opt(1_704_047_400, 0).unwrap();
        assert_eq!(at.date_naive(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());

        let ist = ExchangeTz::resolve(Some("Asia/Kolkata"), None);
        assert_eq!(ist.local_date(at), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let offset = ExchangeTz::resolve(None, Some(19_800));
        assert_eq!(offset.local_date(at), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn new_york_follows_daylight_saving() {
        let ny = ExchangeTz::resolve(Some("America/New_York"), Some(-18_000));
        // 2024-07-01 00:00 EDT is 04:00Z
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 4, 0, 0).unwrap();
        assert_eq!(ny.local_date(at), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        // an hour earlier is still June 30 locally
        let before = Utc.with_ymd_and_hms(2024, 7, 1, 3, 0, 0).unwrap();
        assert_eq!(ny.local_date(before), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }
}
