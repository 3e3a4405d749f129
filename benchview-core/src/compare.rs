//! Comparison Results
//!
//! Old-vs-new comparison of two git refs. The statistics (`delta`, `p`,
//! `insignificant`) are produced by the results API and carried unchanged.

use crate::metric::MetricValue;
use serde::{Deserialize, Serialize};

/// One metric compared between two refs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedValue {
    /// The difference is not statistically significant
    pub insignificant: bool,
    /// Relative change from old to new, in percent
    pub delta: f64,
    /// p-value of the difference
    pub p: f64,
    /// Sample count of the old ref
    pub n1: u64,
    /// Sample count of the new ref
    pub n2: u64,
    /// Value measured on the old ref
    pub old: MetricValue,
    /// Value measured on the new ref
    pub new: MetricValue,
}

/// Compared throughput metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// Total queries per second
    pub total_qps: ComparedValue,
    /// Read queries per second
    pub reads_qps: ComparedValue,
    /// Write queries per second
    pub writes_qps: ComparedValue,
    /// Other queries per second
    pub other_qps: ComparedValue,
    /// Transactions per second
    pub tps: ComparedValue,
}

impl CompareResult {
    /// Metrics keyed by their API name, in display order
    pub fn entries(&self) -> [(&'static str, &ComparedValue); 5] {
        [
            ("total_qps", &self.total_qps),
            ("reads_qps", &self.reads_qps),
            ("writes_qps", &self.writes_qps),
            ("other_qps", &self.other_qps),
            ("tps", &self.tps),
        ]
    }
}

/// Comparison of one macro benchmark type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareData {
    /// Macro benchmark type (e.g. `oltp`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Compared metrics
    pub result: CompareResult,
}
