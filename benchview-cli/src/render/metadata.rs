//! Report Metadata
//!
//! Stamps a report with the tool version, render time (UTC), the repository
//! links point into, and where the input came from.

use benchview_report::ReportMeta;
use chrono::Utc;

/// Build report metadata for a render
pub fn build_report_meta(repository_url: &str, source: Option<String>) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now(),
        repository_url: repository_url.trim_end_matches('/').to_string(),
        source,
    }
}
