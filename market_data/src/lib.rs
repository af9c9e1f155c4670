//! Series loading for the stock insights pipeline.
//!
//! [`loader::load`] turns a company identifier and an [`IntervalClass`] into a
//! validated, chronologically ordered [`OhlcvSeries`] by asking a
//! [`DataProvider`] for raw bars and normalizing what comes back. News headlines
//! come from a [`NewsProvider`] and are flattened into a short summary by
//! [`news::summarize_news`].
//!
//! [`IntervalClass`]: models::interval::IntervalClass
//! [`OhlcvSeries`]: models::bar::OhlcvSeries
//! [`DataProvider`]: providers::DataProvider
//! [`NewsProvider`]: providers::NewsProvider

pub mod errors;
pub mod loader;
pub mod models;
pub mod news;
pub mod providers;

pub use errors::{LoadError, LoadErrorReason};
pub use loader::load;
