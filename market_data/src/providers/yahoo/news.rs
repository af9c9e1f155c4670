use async_trait::async_trait;
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::news::NewsItem,
    providers::{
        ApiSnafu, DecodeSnafu, NewsProvider, ProviderError, RequestSnafu,
        yahoo::{YahooProvider, response::SearchResponse},
    },
};

#[async_trait]
impl NewsProvider for YahooProvider {
    async fn fetch_news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsItem>, ProviderError> {
        let query_params = [
            ("q", symbol.to_string()),
            ("newsCount", limit.to_string()),
            ("quotesCount", "0".to_string()),
        ];

        debug!(%symbol, limit, "requesting news");
        let response = self
            .client
            .get(self.url("/v1/finance/search"))
            .query(&query_params)
            .send()
            .await
            .context(RequestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(RequestSnafu)?;
        if !status.is_success() {
            return ApiSnafu {
                message: format!("HTTP {status}: {body}"),
            }
            .fail();
        }

        let parsed: SearchResponse = serde_json::from_str(&body).context(DecodeSnafu)?;
        Ok(parsed
            .news
            .into_iter()
            .take(limit as usize)
            .map(NewsItem::from)
            .collect())
    }
}
