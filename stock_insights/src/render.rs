//! Plain-text preview of a [`ReportRecord`].

use std::fmt::Write;

use crate::{
    narrative::emphasis::NarrativeLine,
    report::{IndicatorCells, PriceRow, ReportRecord},
};

const PRICE_HEADERS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];
const INDICATOR_HEADERS: [&str; 8] = [
    "Date", "SMA", "EMA", "RSI", "MACD", "Signal", "BB High", "BB Low",
];

/// Lays out rows under headers. The first column is left-aligned, the rest
/// right-aligned, separated by two spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<&str> = headers.to_vec();
    push_line(&mut out, &header_cells, &widths);
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        if i == 0 {
            let _ = write!(line, "{cell:<width$}");
        } else {
            let _ = write!(line, "  {cell:>width$}");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_price_table(rows: &[PriceRow]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.open.clone(),
                r.high.clone(),
                r.low.clone(),
                r.close.clone(),
                r.volume.clone(),
            ]
        })
        .collect();
    render_table(&PRICE_HEADERS, &rows)
}

pub fn render_indicator_table(rows: &[IndicatorCells]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.sma.clone(),
                r.ema.clone(),
                r.rsi.clone(),
                r.macd.clone(),
                r.macd_signal.clone(),
                r.bollinger_high.clone(),
                r.bollinger_low.clone(),
            ]
        })
        .collect();
    render_table(&INDICATOR_HEADERS, &rows)
}

/// The whole report as text: title, intro, headline, tables, news, insights.
///
/// News and insights sections are left out when empty.
pub fn render_text(record: &ReportRecord) -> String {
    let mut out = String::new();

    let title = format!("{} Stock Insights", record.company_name);
    let _ = writeln!(out, "{title}\n{}\n", "=".repeat(title.chars().count()));
    let _ = writeln!(out, "Stock Exchange: {}", record.exchange_label);
    let _ = writeln!(out, "Company: {}", record.company_name);
    let _ = writeln!(out, "Time Interval: {}\n", record.interval_label);
    let _ = writeln!(out, "Open: {}", record.headline.open);
    let _ = writeln!(out, "Close: {}", record.headline.close);

    section(&mut out, "Price Data", &render_price_table(&record.prices));
    section(
        &mut out,
        "Technical Indicators",
        &render_indicator_table(&record.indicators),
    );

    let news = record.news_summary.trim();
    if !news.is_empty() {
        section(&mut out, "News", news);
    }

    if !record.narrative.is_empty() {
        let mut body = String::new();
        for line in &record.narrative {
            match line {
                NarrativeLine::Heading(text) => {
                    let _ = writeln!(body, "## {text}");
                }
                NarrativeLine::Body(text) => {
                    let _ = writeln!(body, "{text}");
                }
            }
        }
        section(&mut out, "Insights", &body);
    }

    out
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = write!(
        out,
        "\n{title}\n{}\n{}\n",
        "-".repeat(title.chars().count()),
        body.trim_end()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Headline;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn table_aligns_columns() {
        let out = render_table(
            &["Date", "Close", "Volume"],
            &[
                cells(&["2024-01-02", "101.00", "1,200"]),
                cells(&["2024-01-01", "99.50", "950"]),
            ],
        );
        insta::assert_snapshot!(out, @r"
        Date         Close  Volume
        2024-01-02  101.00   1,200
        2024-01-01   99.50     950
        ");
    }

    #[test]
    fn short_rows_pad_with_blanks() {
        let out = render_table(&["A", "B"], &[cells(&["x"])]);
        assert_eq!(out, "A  B\nx\n");
    }

    #[test]
    fn full_report_text() {
        let record = ReportRecord {
            company_name: "ACME".into(),
            exchange_label: "NYQ".into(),
            interval_label: "Daily".into(),
            headline: Headline {
                open: "$10.00".into(),
                close: "$10.50".into(),
            },
            prices: vec![PriceRow {
                date: "2024-01-02".into(),
                open: "10.00".into(),
                high: "11.00".into(),
                low: "9.50".into(),
                close: "10.50".into(),
                volume: "12,000".into(),
            }],
            indicators: vec![IndicatorCells {
                date: "2024-01-02".into(),
                sma: "-".into(),
                ema: "10.50".into(),
                rsi: "-".into(),
                macd: "0.00".into(),
                macd_signal: "0.00".into(),
                bollinger_high: "-".into(),
                bollinger_low: "-".into(),
            }],
            news_summary: "- ACME ships rockets (Wire, 2024-01-02)".into(),
            narrative_text: String::new(),
            narrative: vec![
                NarrativeLine::Heading("Outlook".into()),
                NarrativeLine::Body("- Hold for now".into()),
            ],
        };

        insta::assert_snapshot!(render_text(&record), @r"
        ACME Stock Insights
        ===================

        Stock Exchange: NYQ
        Company: ACME
        Time Interval: Daily

        Open: $10.00
        Close: $10.50

        Price Data
        ----------
        Date         Open   High   Low  Close  Volume
        2024-01-02  10.00  11.00  9.50  10.50  12,000

        Technical Indicators
        --------------------
        Date        SMA    EMA  RSI  MACD  Signal  BB High  BB Low
        2024-01-02    -  10.50    -  0.00    0.00        -       -

        News
        ----
        - ACME ships rockets (Wire, 2024-01-02)

        Insights
        --------
        ## Outlook
        - Hold for now
        ");
    }

    #[test]
    fn empty_sections_are_omitted() {
        let record = ReportRecord {
            company_name: "X".into(),
            exchange_label: "Unknown".into(),
            interval_label: "Max".into(),
            headline: Headline {
                open: "$1.00".into(),
                close: "$1.00".into(),
            },
            prices: Vec::new(),
            indicators: Vec::new(),
            news_summary: "  ".into(),
            narrative_text: String::new(),
            narrative: Vec::new(),
        };
        let text = render_text(&record);
        assert!(!text.contains("\nNews\n"));
        assert!(!text.contains("Insights\n--"));
        assert!(text.ends_with("Date  SMA  EMA  RSI  MACD  Signal  BB High  BB Low\n"));
    }
}
