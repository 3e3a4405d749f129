#![warn(missing_docs)]
//! Benchview Format - Metric Display Conventions
//!
//! Pure, deterministic formatters shared by every report surface:
//! - Durations (seconds in, `ns`/`μs`/`ms`/`s` out)
//! - Byte counts (binary units `B` through `PB`)
//! - Signed percentage deltas
//! - Range descriptors (`±x`, or the infinite/unknown markers)
//!
//! Every numeric output uses [`DECIMALS`] fixed decimal places and no locale
//! grouping, so rendered reports are stable across machines.

mod range;
mod units;

pub use range::{INFINITE_MARKER, UNKNOWN_MARKER, format_range};
pub use units::{format_bytes, format_delta, format_duration};

/// Decimal places used for every formatted number
pub const DECIMALS: usize = 2;

/// Errors from formatting metric values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// NaN or infinite input
    #[error("cannot format non-finite value {0}")]
    NonFinite(f64),
    /// Bounded range with a negative half-width
    #[error("range half-width must be non-negative, got {0}")]
    NegativeRange(f64),
    /// Pre-formatted text where a unit formatter needs a number
    #[error("expected a numeric value, got {0:?}")]
    NotNumeric(String),
}

pub(crate) fn ensure_finite(value: f64) -> Result<f64, FormatError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormatError::NonFinite(value))
    }
}
