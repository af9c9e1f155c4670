use std::fmt::Write;

use crate::report::IndicatorCells;

pub const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant that provides insights based on stock data.";

/// A system/user message pair for a chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the analysis request for one report.
///
/// Only the newest `max_rows` indicator rows are quoted; `rows` must already
/// be newest first.
pub fn build_prompt(
    company_name: &str,
    interval_label: &str,
    news_summary: &str,
    rows: &[IndicatorCells],
    max_rows: usize,
) -> Prompt {
    let mut user = String::new();
    let _ = writeln!(
        user,
        "Analyze the stock performance of {company_name} over the {interval_label} period."
    );
    user.push_str("Start with a short overview of the company.\n");
    let _ = writeln!(
        user,
        "Then use these recent headlines to inform your view:\n{}",
        news_summary.trim()
    );
    user.push_str("Then work through the technical indicators below, newest first:\n");
    user.push_str(&indicator_block(rows, max_rows));
    user.push_str(
        "Give actionable insights and a summary for an investor, and say whether to buy the stock now.\n\
         If not, say how long to wait before reconsidering.\n\
         Be specific, base the answer on the data, and skip generic disclaimers.\n\
         Use bullet points and plain language.\n",
    );

    Prompt {
        system: SYSTEM_MESSAGE.to_string(),
        user,
    }
}

fn indicator_block(rows: &[IndicatorCells], max_rows: usize) -> String {
    let mut out =
        String::from("date | sma | ema | rsi | macd | macd_signal | bollinger_high | bollinger_low\n");
    for row in rows.iter().take(max_rows) {
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {} | {} | {} | {}",
            row.date,
            row.sma,
            row.ema,
            row.rsi,
            row.macd,
            row.macd_signal,
            row.bollinger_high,
            row.bollinger_low
        );
    }
    out
}
