//! Metric Rows
//!
//! A row pairs a display title with a metric value and the unit formatter
//! that applies to its center. Rendering turns it into a two-part line:
//! the title, and `"<center> (<range>)"`.

use benchview_core::{Center, MetricValue};
use benchview_format::{FormatError, format_bytes, format_duration, format_range};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unit formatter applied to a row's center value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Displayed as-is (counts, throughput)
    #[default]
    None,
    /// Seconds, scaled to `ns`/`μs`/`ms`/`s`
    Time,
    /// Bytes, scaled to binary units
    Memory,
}

impl FormatKind {
    /// Format a center value with this kind's unit formatter
    pub fn format(self, center: &Center) -> Result<String, FormatError> {
        match (self, center) {
            (FormatKind::None, Center::Number(n)) if !n.is_finite() => {
                Err(FormatError::NonFinite(*n))
            }
            (FormatKind::None, center) => Ok(center.to_string()),
            (FormatKind::Time, Center::Number(seconds)) => format_duration(*seconds),
            (FormatKind::Memory, Center::Number(bytes)) => format_bytes(*bytes),
            (_, Center::Text(text)) => Err(FormatError::NotNumeric(text.clone())),
        }
    }
}

impl std::str::FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(FormatKind::None),
            "time" => Ok(FormatKind::Time),
            "memory" => Ok(FormatKind::Memory),
            other => Err(format!("Unknown format kind: {}", other)),
        }
    }
}

/// One metric line of a report, before formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Display label
    pub title: String,
    /// Measured value
    pub value: MetricValue,
    /// Formatter for the center value; absent or `null` means none
    #[serde(default, deserialize_with = "nullable_format")]
    pub format: FormatKind,
}

impl MetricRow {
    /// Row displayed without unit conversion
    pub fn new(title: impl Into<String>, value: MetricValue) -> Self {
        Self {
            title: title.into(),
            value,
            format: FormatKind::None,
        }
    }

    /// Set the unit formatter
    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }
}

fn nullable_format<'de, D>(deserializer: D) -> Result<FormatKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FormatKind>::deserialize(deserializer)?.unwrap_or_default())
}

/// A rendered row: title on the left, formatted value on the right
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Left part
    pub title: String,
    /// Right part, `"<center> (<range>)"`
    pub value: String,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.value)
    }
}

/// Render a metric row into a display line.
pub fn render_row(row: &MetricRow) -> Result<DisplayLine, FormatError> {
    Ok(DisplayLine {
        title: row.title.clone(),
        value: render_value(&row.value, row.format)?,
    })
}

/// Format a metric value as `"<center> (<range>)"`.
pub fn render_value(value: &MetricValue, format: FormatKind) -> Result<String, FormatError> {
    let center = format.format(&value.center)?;
    let range = format_range(&value.range)?;
    Ok(format!("{} ({})", center, range))
}
