//! Range Descriptor Formatting

use crate::{DECIMALS, FormatError, ensure_finite};
use benchview_core::Range;

/// Marker for a range that could not be bounded
pub const INFINITE_MARKER: &str = "∞";

/// Marker for a range that could not be computed
pub const UNKNOWN_MARKER: &str = "n/a";

/// Format a range descriptor for display.
///
/// `infinite` takes precedence over `unknown` when a producer sets both.
/// Bounded ranges print as `±{value}` with [`DECIMALS`] places.
pub fn format_range(range: &Range) -> Result<String, FormatError> {
    if range.infinite {
        return Ok(INFINITE_MARKER.to_string());
    }
    if range.unknown {
        return Ok(UNKNOWN_MARKER.to_string());
    }

    let value = ensure_finite(range.value)?;
    if value < 0.0 {
        return Err(FormatError::NegativeRange(value));
    }
    // abs() folds -0.0 into 0.0
    Ok(format!("±{:.*}", DECIMALS, value.abs()))
}
