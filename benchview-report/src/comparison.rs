//! Comparison Tables
//!
//! Old-vs-new view of a macro benchmark between two git refs. Statistics come
//! precomputed from the results API; this module only formats them.

use crate::links::commit_url;
use crate::macro_card::metric_title;
use crate::row::{FormatKind, render_value};
use benchview_core::{CompareData, ComparedValue};
use benchview_format::{FormatError, format_delta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a compared metric
///
/// Every compared metric is a throughput, so a positive delta is an
/// improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Significant increase
    Improvement,
    /// Significant decrease
    Regression,
    /// Significant but zero delta
    Unchanged,
    /// Not statistically significant
    Insignificant,
}

impl Verdict {
    /// Classify a compared value
    pub fn of(value: &ComparedValue) -> Self {
        if value.insignificant {
            Verdict::Insignificant
        } else if value.delta > 0.0 {
            Verdict::Improvement
        } else if value.delta < 0.0 {
            Verdict::Regression
        } else {
            Verdict::Unchanged
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Improvement => "improvement",
            Verdict::Regression => "regression",
            Verdict::Unchanged => "unchanged",
            Verdict::Insignificant => "insignificant",
        };
        f.write_str(s)
    }
}

/// One rendered line of a comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLine {
    /// Metric title
    pub title: String,
    /// Old ref value, `"<center> (<range>)"`
    pub old: String,
    /// New ref value, `"<center> (<range>)"`
    pub new: String,
    /// Signed relative change, e.g. `+5.20%`
    pub delta: String,
    /// p-value with three decimals
    pub p_value: String,
    /// Sample counts `(old, new)`
    pub samples: (u64, u64),
    /// Outcome
    pub verdict: Verdict,
}

impl ComparisonLine {
    /// Render one compared metric
    pub fn build(title: &str, value: &ComparedValue) -> Result<Self, FormatError> {
        if !value.p.is_finite() {
            return Err(FormatError::NonFinite(value.p));
        }

        Ok(Self {
            title: title.to_string(),
            old: render_value(&value.old, FormatKind::None)?,
            new: render_value(&value.new, FormatKind::None)?,
            delta: format_delta(value.delta)?,
            p_value: format!("{:.3}", value.p),
            samples: (value.n1, value.n2),
            verdict: Verdict::of(value),
        })
    }
}

/// Rendered comparison of one macro benchmark type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Macro benchmark type
    pub kind: String,
    /// Baseline ref
    pub old_ref: String,
    /// Candidate ref
    pub new_ref: String,
    /// Link to the baseline commit
    pub old_url: String,
    /// Link to the candidate commit
    pub new_url: String,
    /// Compared metrics in display order
    pub lines: Vec<ComparisonLine>,
}

impl ComparisonReport {
    /// Render a comparison between `old_ref` and `new_ref`
    pub fn build(
        data: &CompareData,
        old_ref: &str,
        new_ref: &str,
        repository_url: &str,
    ) -> Result<Self, FormatError> {
        let lines = data
            .result
            .entries()
            .into_iter()
            .map(|(key, value)| ComparisonLine::build(metric_title(key), value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind: data.kind.clone(),
            old_ref: old_ref.to_string(),
            new_ref: new_ref.to_string(),
            old_url: commit_url(repository_url, old_ref),
            new_url: commit_url(repository_url, new_ref),
            lines,
        })
    }

    /// Number of lines with the given verdict
    pub fn count(&self, verdict: Verdict) -> usize {
        self.lines.iter().filter(|l| l.verdict == verdict).count()
    }
}
