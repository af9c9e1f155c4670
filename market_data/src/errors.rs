use snafu::{Backtrace, Snafu};

use crate::{models::bar::SeriesError, providers::ProviderError};

/// Why a series could not be loaded.
///
/// Callers treat every variant as "could not fetch data"; the reason is kept
/// for logs and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorReason {
    NotFound,
    ProviderError,
    EmptySeries,
}

/// Errors returned by [`load`](crate::loader::load).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LoadError {
    /// The identifier is blank or unknown to the provider.
    #[snafu(display("No market data found for '{symbol}'"))]
    NotFound { symbol: String, backtrace: Backtrace },

    /// The provider call failed.
    #[snafu(display("Provider failed while loading '{symbol}': {source}"))]
    Provider {
        symbol: String,
        #[snafu(backtrace)]
        source: ProviderError,
    },

    /// The provider answered, but with zero usable bars.
    #[snafu(display("Provider returned no bars for '{symbol}'"))]
    EmptySeries { symbol: String, backtrace: Backtrace },

    /// The provider's bars broke a series invariant after normalization.
    #[snafu(display("Provider returned an unusable series for '{symbol}': {source}"))]
    InvalidSeries {
        symbol: String,
        source: SeriesError,
        backtrace: Backtrace,
    },
}

impl LoadError {
    pub fn reason(&self) -> LoadErrorReason {
        match self {
            LoadError::NotFound { .. } => LoadErrorReason::NotFound,
            LoadError::Provider { .. } | LoadError::InvalidSeries { .. } => {
                LoadErrorReason::ProviderError
            }
            LoadError::EmptySeries { .. } => LoadErrorReason::EmptySeries,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            LoadError::NotFound { symbol, .. }
            | LoadError::Provider { symbol, .. }
            | LoadError::EmptySeries { symbol, .. }
            | LoadError::InvalidSeries { symbol, .. } => symbol,
        }
    }
}
