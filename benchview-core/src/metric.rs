//! Metric Values
//!
//! A measured quantity is a center estimate plus an uncertainty range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Uncertainty annotation around a center value
///
/// At most one of `infinite` / `unknown` is expected to be set. When both are
/// clear, `value` is the finite, non-negative half-width of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// The range could not be bounded
    pub infinite: bool,
    /// No range could be computed
    pub unknown: bool,
    /// Half-width of the range
    pub value: f64,
}

impl Range {
    /// A bounded range with the given half-width
    pub fn bounded(value: f64) -> Self {
        Self {
            infinite: false,
            unknown: false,
            value,
        }
    }

    /// An unbounded range
    pub fn infinite() -> Self {
        Self {
            infinite: true,
            unknown: false,
            value: 0.0,
        }
    }

    /// A range that could not be computed
    pub fn unknown() -> Self {
        Self {
            infinite: false,
            unknown: true,
            value: 0.0,
        }
    }

    /// Whether the range carries a usable half-width
    pub fn is_bounded(&self) -> bool {
        !self.infinite && !self.unknown
    }
}

/// Producers that omit the range entirely are treated as "no range computed".
impl Default for Range {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Center estimate of a metric
///
/// Almost always a number; some producers send an already formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Center {
    /// Numeric point estimate
    Number(f64),
    /// Pre-formatted value, displayed as-is
    Text(String),
}

impl Center {
    /// Numeric value, if this center is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Center::Number(n) => Some(*n),
            Center::Text(_) => None,
        }
    }
}

impl From<f64> for Center {
    fn from(value: f64) -> Self {
        Center::Number(value)
    }
}

impl From<&str> for Center {
    fn from(value: &str) -> Self {
        Center::Text(value.to_string())
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Center::Number(n) => write!(f, "{}", n),
            Center::Text(s) => f.write_str(s),
        }
    }
}

/// One measured quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Point estimate
    pub center: Center,
    /// Confidence level the range was computed at, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Uncertainty around `center`
    #[serde(default)]
    pub range: Range,
}

impl MetricValue {
    /// Build a value from a center and range
    pub fn new(center: impl Into<Center>, range: Range) -> Self {
        Self {
            center: center.into(),
            confidence: None,
            range,
        }
    }
}
