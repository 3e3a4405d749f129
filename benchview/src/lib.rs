#![warn(missing_docs)]
//! # Benchview
//!
//! Presentation layer for database-proxy benchmark results.
//!
//! Benchview takes the JSON documents served by a benchmark-results API and
//! renders them consistently:
//! - **Unit Formatting**: durations in `ns`/`μs`/`ms`/`s`, byte counts in binary units, fixed precision
//! - **Range Display**: `±x` half-widths, with distinct markers for unbounded and unknown ranges
//! - **Metric Rows**: title plus `"<center> (<range>)"`, formatter chosen by `FormatKind`
//! - **Macro Cards**: the fixed QPS/TPS/latency/CPU/memory row set with a commit link
//! - **Comparisons**: precomputed delta, p-value and significance shown side by side
//! - **Outputs**: terminal text, JSON, GitHub Markdown, CSV
//!
//! ## Quick Start
//!
//! ```
//! use benchview::prelude::*;
//!
//! let row = MetricRow::new("QPS Total", MetricValue::new(1500.4, Range::bounded(10.2)));
//! let line = render_row(&row).unwrap();
//!
//! assert_eq!(line.title, "QPS Total");
//! assert_eq!(line.value, "1500.4 (±10.20)");
//! ```
//!
//! ## Unit Formatters
//!
//! ```
//! use benchview::{format_bytes, format_duration};
//!
//! assert_eq!(format_duration(0.000123).unwrap(), "123.00 μs");
//! assert_eq!(format_bytes(1048576.0).unwrap(), "1.00 MB");
//! ```

// Re-export the data contract
pub use benchview_core::{
    Center, CompareData, CompareResult, ComparedValue, ComponentStats, MacroData, MetricValue,
    PullRequest, Range, ReleaseRef, SearchData, StatusEntry, Version,
};

// Re-export formatters
pub use benchview_format::{
    DECIMALS, FormatError, INFINITE_MARKER, UNKNOWN_MARKER, format_bytes, format_delta,
    format_duration, format_range,
};

// Re-export rendering
pub use benchview_report::{
    ComparisonLine, ComparisonReport, DisplayLine, FormatKind, MacroReport, MetricRow,
    OutputFormat, PullRequestLine, ReleaseLine, Report, ReportMeta, StatusLine, Verdict,
    generate_csv_report, generate_json_report, generate_markdown_summary, macro_rows, render_row,
    render_value,
};

// Re-export CLI building blocks
pub use benchview_cli::{BenchviewConfig, build_report_meta, format_human_output};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Center, DisplayLine, FormatKind, MacroData, MetricRow, MetricValue, Range, render_row,
    };
}

/// Run the Benchview CLI.
///
/// ```ignore
/// fn main() {
///     benchview::run().unwrap();
/// }
/// ```
pub use benchview_cli::run;
