//! Macro Benchmark Results

use crate::metric::MetricValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-component breakdown of a metric (e.g. `vtgate`, `vttablet`)
///
/// Iteration order is the component name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentStats(BTreeMap<String, MetricValue>);

impl ComponentStats {
    /// Empty breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a component value
    pub fn insert(&mut self, component: impl Into<String>, value: MetricValue) {
        self.0.insert(component.into(), value);
    }

    /// Value for a single component
    pub fn get(&self, component: &str) -> Option<&MetricValue> {
        self.0.get(component)
    }

    /// Components in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no component reported a value
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, MetricValue)> for ComponentStats {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Results of one macro benchmark for one git ref
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroData {
    /// Git ref the benchmark ran against (may be empty in search results)
    #[serde(default)]
    pub git_ref: String,
    /// Total queries per second
    pub total_qps: MetricValue,
    /// Read queries per second
    pub reads_qps: MetricValue,
    /// Write queries per second
    pub writes_qps: MetricValue,
    /// Other queries per second
    pub other_qps: MetricValue,
    /// Transactions per second
    pub tps: MetricValue,
    /// Latency
    pub latency: MetricValue,
    /// Error count
    pub errors: MetricValue,
    /// Total CPU seconds per query across components
    pub total_components_cpu_time: MetricValue,
    /// CPU seconds per query by component
    #[serde(default)]
    pub components_cpu_time: ComponentStats,
    /// Total bytes allocated per query across components
    pub total_components_mem_stats_alloc_bytes: MetricValue,
    /// Bytes allocated per query by component
    #[serde(default)]
    pub components_mem_stats_alloc_bytes: ComponentStats,
}

/// Search response: macro benchmark name to its results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    /// Results keyed by macro benchmark name (e.g. `oltp`, `tpcc`)
    #[serde(rename = "Macros", default)]
    pub macros: BTreeMap<String, MacroData>,
}
