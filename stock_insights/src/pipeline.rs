//! One report request, end to end: load, compute, collect news and
//! commentary, assemble.

use indicator_engine::{EngineError, IndicatorTable};
use market_data::{
    LoadError, LoadErrorReason,
    models::{bar::OhlcvSeries, interval::IntervalClass},
    news::summarize_news,
    providers::{DataProvider, NewsProvider, ProviderInitError, yahoo::YahooProvider},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::{InsightsConfig, ReportCfg},
    narrative::{ChatCompletionsClient, FALLBACK_NARRATIVE, NarrativeGenerator, build_prompt},
    report::{IndicatorCells, ReportInput, ReportRecord, assemble},
};

/// News summary used when the headline lookup itself fails.
pub const NEWS_UNAVAILABLE: &str = "News unavailable.";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not fetch data for {}", LoadError::symbol(.0))]
    Load(#[from] LoadError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl PipelineError {
    /// The loader's failure reason, when loading is what failed.
    pub fn load_reason(&self) -> Option<LoadErrorReason> {
        match self {
            PipelineError::Load(err) => Some(err.reason()),
            PipelineError::Engine(_) => None,
        }
    }
}

pub struct ReportPipeline {
    bars: Box<dyn DataProvider>,
    news: Option<Box<dyn NewsProvider>>,
    narrator: Option<Box<dyn NarrativeGenerator>>,
    news_count: u32,
    prompt_rows: usize,
    placeholder: String,
}

impl ReportPipeline {
    /// A pipeline with no news source and no narrator.
    pub fn new(bars: Box<dyn DataProvider>, report: &ReportCfg) -> Self {
        Self {
            bars,
            news: None,
            narrator: None,
            news_count: 5,
            prompt_rows: report.prompt_rows,
            placeholder: report.undefined_placeholder.clone(),
        }
    }

    pub fn with_news(mut self, news: Box<dyn NewsProvider>, count: u32) -> Self {
        self.news = Some(news);
        self.news_count = count;
        self
    }

    pub fn with_narrator(mut self, narrator: Box<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Wires the Yahoo provider and, when enabled, the news lookup and the
    /// chat-completions narrator.
    ///
    /// A missing API key is not an error: the report is produced without
    /// commentary.
    pub fn from_config(
        cfg: &InsightsConfig,
        news: bool,
        narrative: bool,
    ) -> Result<Self, ProviderInitError> {
        let yahoo = YahooProvider::new(&cfg.market_data.base_url, &cfg.market_data.user_agent)?;
        let mut pipeline = Self::new(Box::new(yahoo.clone()), &cfg.report);

        if news && cfg.market_data.news_enabled {
            pipeline = pipeline.with_news(Box::new(yahoo), cfg.market_data.news_count);
        }

        if narrative && cfg.narrative.enabled {
            match ChatCompletionsClient::from_config(&cfg.narrative) {
                Ok(client) => {
                    debug!(model = client.model(), "narrative enabled");
                    pipeline = pipeline.with_narrator(Box::new(client));
                }
                Err(err) => warn!(error = %err, "narrative disabled"),
            }
        }

        Ok(pipeline)
    }

    pub fn has_news(&self) -> bool {
        self.news.is_some()
    }

    pub fn has_narrator(&self) -> bool {
        self.narrator.is_some()
    }

    /// Loads the series and computes its indicator table.
    pub async fn indicators(
        &self,
        symbol: &str,
        interval: IntervalClass,
    ) -> Result<(OhlcvSeries, IndicatorTable), PipelineError> {
        let series = market_data::load(self.bars.as_ref(), symbol, interval).await?;
        let table = indicator_engine::compute(&series)?;
        Ok((series, table))
    }

    /// Builds a full report. Only loading and computing can fail; news and
    /// narrative problems degrade to fixed text.
    pub async fn run(
        &self,
        symbol: &str,
        interval: IntervalClass,
        company_name: Option<&str>,
    ) -> Result<ReportRecord, PipelineError> {
        let (series, table) = self.indicators(symbol, interval).await?;
        let company_name = company_name.unwrap_or(series.symbol());

        let news_summary = self.news_summary(series.symbol()).await;
        let narrative_text = self
            .narrative(company_name, &series, &news_summary, &table)
            .await;

        let record = assemble(
            ReportInput {
                company_name,
                series: &series,
                table: &table,
                news_summary: &news_summary,
                narrative_text: &narrative_text,
            },
            &self.placeholder,
        );
        info!(
            symbol = series.symbol(),
            %interval,
            bars = series.len(),
            "assembled report"
        );
        Ok(record)
    }

    async fn news_summary(&self, symbol: &str) -> String {
        let Some(news) = &self.news else {
            return String::new();
        };
        match news.fetch_news(symbol, self.news_count).await {
            Ok(items) => summarize_news(&items),
            Err(err) => {
                warn!(symbol, error = %err, "news lookup failed");
                NEWS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn narrative(
        &self,
        company_name: &str,
        series: &OhlcvSeries,
        news_summary: &str,
        table: &IndicatorTable,
    ) -> String {
        let Some(narrator) = &self.narrator else {
            return String::new();
        };
        let rows = IndicatorCells::newest_first(table, series.timezone(), &self.placeholder);
        let prompt = build_prompt(
            company_name,
            series.interval().label(),
            news_summary,
            &rows,
            self.prompt_rows,
        );
        match narrator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(company = company_name, error = %err, "narrative generation failed");
                FALLBACK_NARRATIVE.to_string()
            }
        }
    }
}
