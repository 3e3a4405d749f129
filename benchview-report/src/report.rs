//! Report Data Structures

use crate::comparison::ComparisonReport;
use crate::listing::{PullRequestLine, ReleaseLine, StatusLine};
use crate::macro_card::MacroReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete rendered report
///
/// Sections are independent; output generators skip empty ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Render metadata
    pub meta: ReportMeta,
    /// Macro benchmark cards, in name order
    #[serde(default)]
    pub macros: Vec<MacroReport>,
    /// Old-vs-new comparisons
    #[serde(default)]
    pub comparisons: Vec<ComparisonReport>,
    /// Benchmark run status rows
    #[serde(default)]
    pub status: Vec<StatusLine>,
    /// Pull request rows
    #[serde(default)]
    pub pull_requests: Vec<PullRequestLine>,
    /// Release rows
    #[serde(default)]
    pub releases: Vec<ReleaseLine>,
}

impl Report {
    /// Empty report with the given metadata
    pub fn new(meta: ReportMeta) -> Self {
        Self {
            meta,
            macros: Vec::new(),
            comparisons: Vec::new(),
            status: Vec::new(),
            pull_requests: Vec::new(),
            releases: Vec::new(),
        }
    }

    /// Whether no section has any content
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
            && self.comparisons.is_empty()
            && self.status.is_empty()
            && self.pull_requests.is_empty()
            && self.releases.is_empty()
    }
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Version of the tool that rendered the report
    pub version: String,
    /// When the report was rendered
    pub generated_at: DateTime<Utc>,
    /// Repository commit and PR links point into
    pub repository_url: String,
    /// Where the input came from (file path, or `stdin`)
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta() -> ReportMeta {
        ReportMeta {
            version: "0.1.0".to_string(),
            generated_at: Utc.with_ymd_and_hms(2023, 5, 10, 12, 0, 0).unwrap(),
            repository_url: "https://github.com/vitessio/vitess".to_string(),
            source: None,
        }
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = Report::new(meta());
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_with_status_is_not_empty() {
        let mut report = Report::new(meta());
        report.status.push(StatusLine {
            uuid: "a1".to_string(),
            git_ref: "abc".to_string(),
            source: "cron".to_string(),
            kind: "oltp".to_string(),
            pull_request: None,
            golang_version: "1.20".to_string(),
            status: "finished".to_string(),
            started_at: "2023-05-10T12:00:00Z".to_string(),
            duration: "5m 00s".to_string(),
        });
        assert!(!report.is_empty());
    }
}
