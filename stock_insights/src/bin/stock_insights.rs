use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use market_data::models::interval::IntervalClass;
use shared_utils::env::get_optional_env_var;
use stock_insights::{
    PipelineError, ReportPipeline,
    config::{InsightsConfig, load_config_path},
    render::{render_indicator_table, render_text},
    report::IndicatorCells,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "stock_insights.toml";
const CONFIG_ENV: &str = "STOCK_INSIGHTS_CONFIG";

#[derive(Parser)]
#[command(version, about = "Stock price history, technical indicators and commentary")]
struct Cli {
    /// Path to the config file (defaults to $STOCK_INSIGHTS_CONFIG, then ./stock_insights.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build a full report: prices, indicators, news and commentary
    Report {
        /// Ticker symbol (e.g. "AAPL")
        symbol: String,

        /// daily, weekly, monthly, yearly or max
        #[arg(long, default_value = "daily")]
        interval: IntervalClass,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the report here instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Display name; defaults to the symbol
        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        no_news: bool,

        #[arg(long)]
        no_narrative: bool,
    },

    /// Print the indicator table only
    Indicators {
        symbol: String,

        #[arg(long, default_value = "daily")]
        interval: IntervalClass,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(run(cli.cmd, cfg))
}

fn load_config(explicit: Option<&Path>) -> Result<InsightsConfig> {
    if let Some(path) = explicit {
        return load_config_path(path);
    }
    if let Some(path) = get_optional_env_var(CONFIG_ENV) {
        return load_config_path(path);
    }
    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return load_config_path(local);
    }
    Ok(InsightsConfig::default())
}

async fn run(cmd: Cmd, cfg: InsightsConfig) -> Result<()> {
    match cmd {
        Cmd::Report {
            symbol,
            interval,
            format,
            output,
            company,
            no_news,
            no_narrative,
        } => {
            let pipeline = ReportPipeline::from_config(&cfg, !no_news, !no_narrative)?;
            let record = pipeline
                .run(&symbol, interval, company.as_deref())
                .await
                .map_err(log_failure)?;

            let rendered = match format {
                Format::Text => render_text(&record),
                Format::Json => {
                    let mut json = serde_json::to_string_pretty(&record)?;
                    json.push('\n');
                    json
                }
            };
            emit(&rendered, output.as_deref())?;
        }
        Cmd::Indicators { symbol, interval } => {
            let pipeline = ReportPipeline::from_config(&cfg, false, false)?;
            let (series, table) = pipeline
                .indicators(&symbol, interval)
                .await
                .map_err(log_failure)?;
            let rows = IndicatorCells::newest_first(
                &table,
                series.timezone(),
                &cfg.report.undefined_placeholder,
            );
            emit(&render_indicator_table(&rows), None)?;
        }
    }
    Ok(())
}

fn log_failure(err: PipelineError) -> PipelineError {
    match err.load_reason() {
        Some(reason) => error!(?reason, "{err}"),
        None => error!("{err}"),
    }
    err
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{text}"),
    }
    Ok(())
}
