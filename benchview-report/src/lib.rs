#![warn(missing_docs)]
//! Benchview Report - Rendering and Output
//!
//! Turns result data into display-ready reports:
//! - Metric rows (`MetricRow` → `DisplayLine`)
//! - Macro benchmark cards with commit links
//! - Old-vs-new comparison tables
//! - Run status, pull request and release listings
//!
//! and serializes them as:
//! - JSON (machine-readable)
//! - Markdown (GitHub step summaries, PR comments)
//! - CSV (spreadsheet-compatible)

mod comparison;
mod csv;
mod json;
mod links;
mod listing;
mod macro_card;
mod markdown;
mod report;
mod row;

pub use comparison::{ComparisonLine, ComparisonReport, Verdict};
pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use links::{commit_url, pull_request_url, short_ref};
pub use listing::{
    MISSING, PullRequestLine, ReleaseLine, StatusLine, format_elapsed, parse_timestamp,
};
pub use macro_card::{MacroReport, macro_rows};
pub use markdown::generate_markdown_summary;
pub use report::{Report, ReportMeta};
pub use row::{DisplayLine, FormatKind, MetricRow, render_row, render_value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON of the rendered report
    Json,
    /// GitHub-flavoured Markdown
    Markdown,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" | "github" | "github-summary" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
