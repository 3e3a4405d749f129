//! Macro Benchmark Cards
//!
//! A card is the rendered view of one macro benchmark for one git ref: the
//! benchmark name, a commit link, and a fixed sequence of metric lines.
//!
//! ```text
//!                QPS Total │ 1500.4 (±10.20)
//!                      ... │ ...
//!        Total CPU / query │ 412.00 μs (±3.10)
//!   CPU / query (vtgate)   │ ...
//!  Total Allocated / query │ 1.25 MB (n/a)
//! ```

use crate::links::commit_url;
use crate::row::{DisplayLine, FormatKind, MetricRow, render_row};
use benchview_core::{ComponentStats, MacroData};
use benchview_format::FormatError;
use serde::{Deserialize, Serialize};

/// Display title for a metric key of the results API
pub(crate) fn metric_title(key: &str) -> &str {
    match key {
        "total_qps" => "QPS Total",
        "reads_qps" => "QPS Reads",
        "writes_qps" => "QPS Writes",
        "other_qps" => "QPS Other",
        "tps" => "TPS",
        "latency" => "Latency",
        "errors" => "Errors",
        "total_components_cpu_time" => "Total CPU / query",
        "total_components_mem_stats_alloc_bytes" => "Total Allocated / query",
        other => other,
    }
}

/// Rendered macro benchmark card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroReport {
    /// Macro benchmark name (e.g. `oltp`)
    pub name: String,
    /// Git ref the results belong to
    pub git_ref: String,
    /// Link to the commit in source control
    pub commit_url: String,
    /// Rendered metric lines in display order
    pub lines: Vec<DisplayLine>,
}

impl MacroReport {
    /// Render a card.
    ///
    /// An empty `git_ref` falls back to the ref carried by `data`.
    pub fn build(
        name: &str,
        data: &MacroData,
        git_ref: &str,
        repository_url: &str,
    ) -> Result<Self, FormatError> {
        let git_ref = if git_ref.is_empty() {
            data.git_ref.as_str()
        } else {
            git_ref
        };

        let lines = macro_rows(data)
            .iter()
            .map(render_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            git_ref: git_ref.to_string(),
            commit_url: commit_url(repository_url, git_ref),
            lines,
        })
    }
}

/// Rows of a macro card in display order
///
/// Throughput, latency and errors are shown as-is; CPU time per query is
/// formatted as a duration and allocations per query as bytes, each with a
/// total followed by one row per component.
pub fn macro_rows(data: &MacroData) -> Vec<MetricRow> {
    let plain = [
        ("total_qps", &data.total_qps),
        ("reads_qps", &data.reads_qps),
        ("writes_qps", &data.writes_qps),
        ("other_qps", &data.other_qps),
        ("tps", &data.tps),
        ("latency", &data.latency),
        ("errors", &data.errors),
    ];

    let mut rows: Vec<MetricRow> = plain
        .into_iter()
        .map(|(key, value)| MetricRow::new(metric_title(key), value.clone()))
        .collect();

    rows.push(
        MetricRow::new(
            metric_title("total_components_cpu_time"),
            data.total_components_cpu_time.clone(),
        )
        .with_format(FormatKind::Time),
    );
    push_components(&mut rows, "CPU / query", &data.components_cpu_time, FormatKind::Time);

    rows.push(
        MetricRow::new(
            metric_title("total_components_mem_stats_alloc_bytes"),
            data.total_components_mem_stats_alloc_bytes.clone(),
        )
        .with_format(FormatKind::Memory),
    );
    push_components(
        &mut rows,
        "Allocated / query",
        &data.components_mem_stats_alloc_bytes,
        FormatKind::Memory,
    );

    rows
}

fn push_components(
    rows: &mut Vec<MetricRow>,
    label: &str,
    stats: &ComponentStats,
    format: FormatKind,
) {
    for (component, value) in stats.iter() {
        rows.push(
            MetricRow::new(format!("{} ({})", label, component), value.clone()).with_format(format),
        );
    }
}
