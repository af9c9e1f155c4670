use async_trait::async_trait;
use reqwest::StatusCode;
use snafu::{ResultExt, ensure};
use tracing::debug;

use crate::{
    models::request_params::{BarsRequest, is_valid_symbol},
    providers::{
        ApiSnafu, DataProvider, DecodeSnafu, NotFoundSnafu, ProviderError, RawBars, RequestSnafu,
        yahoo::{
            YahooProvider,
            params::construct_params,
            response::{ChartEnvelope, ChartError},
        },
    },
};

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<RawBars, ProviderError> {
        // Validate the window before spending a round trip.
        let query_params = construct_params(request)?;
        ensure!(
            is_valid_symbol(&request.symbol),
            NotFoundSnafu {
                symbol: &request.symbol
            }
        );
        let url = self.url(&format!("/v8/finance/chart/{}", request.symbol));

        debug!(symbol = %request.symbol, interval = %request.interval, "requesting chart");
        let response = self
            .client
            .get(&url)
            .query(&query_params)
            .send()
            .await
            .context(RequestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(RequestSnafu)?;

        if status == StatusCode::NOT_FOUND {
            return NotFoundSnafu {
                symbol: &request.symbol,
            }
            .fail();
        }

        if !status.is_success() {
            // Yahoo usually explains itself in the chart.error object.
            let message = serde_json::from_str::<ChartEnvelope>(&body)
                .ok()
                .and_then(|env| env.chart.error)
                .map(describe)
                .unwrap_or_else(|| format!("HTTP {status}: {body}"));
            return ApiSnafu { message }.fail();
        }

        let envelope: ChartEnvelope = serde_json::from_str(&body).context(DecodeSnafu)?;

        if let Some(error) = envelope.chart.error {
            if error.is_not_found() {
                return NotFoundSnafu {
                    symbol: &request.symbol,
                }
                .fail();
            }
            return ApiSnafu {
                message: describe(error),
            }
            .fail();
        }

        match envelope.chart.result.and_then(|r| r.into_iter().next()) {
            Some(result) => Ok(result.into_raw_bars(&request.symbol)),
            None => NotFoundSnafu {
                symbol: &request.symbol,
            }
            .fail(),
        }
    }
}

fn describe(error: ChartError) -> String {
    match error.description {
        Some(description) => format!("{}: {description}", error.code),
        None => error.code,
    }
}
