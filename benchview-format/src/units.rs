//! Unit Formatters
//!
//! Values are scaled up a unit ladder until the mantissa drops below the
//! ladder base, then printed with [`DECIMALS`] places and the unit suffix.

use crate::{DECIMALS, FormatError, ensure_finite};

const DURATION_UNITS: &[&str] = &["ns", "μs", "ms", "s"];
const DURATION_BASE: f64 = 1000.0;
const NANOS_PER_SECOND: f64 = 1e9;

const BYTE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];
const BYTE_BASE: f64 = 1024.0;

/// Format a duration given in seconds.
///
/// Picks the largest of `ns`, `μs`, `ms`, `s` that keeps the mantissa at or
/// above 1. Sub-nanosecond values stay in `ns`, anything from one second up
/// stays in `s`.
///
/// ```
/// use benchview_format::format_duration;
///
/// assert_eq!(format_duration(0.000123).unwrap(), "123.00 μs");
/// assert_eq!(format_duration(0.0).unwrap(), "0.00 ns");
/// ```
pub fn format_duration(seconds: f64) -> Result<String, FormatError> {
    let nanos = ensure_finite(seconds)? * NANOS_PER_SECOND;
    Ok(scale(nanos, DURATION_BASE, DURATION_UNITS))
}

/// Format a byte count using binary (1024) units.
///
/// The mantissa `m` satisfies `1 <= |m| < 1024`, except below one byte
/// (kept in `B`) and beyond the largest unit (kept in `PB`).
///
/// ```
/// use benchview_format::format_bytes;
///
/// assert_eq!(format_bytes(1048576.0).unwrap(), "1.00 MB");
/// assert_eq!(format_bytes(512.0).unwrap(), "512.00 B");
/// ```
pub fn format_bytes(bytes: f64) -> Result<String, FormatError> {
    ensure_finite(bytes)?;
    Ok(scale(bytes, BYTE_BASE, BYTE_UNITS))
}

/// Format a relative change in percent with an explicit sign (`+5.20%`).
pub fn format_delta(percent: f64) -> Result<String, FormatError> {
    let percent = normalize_zero(ensure_finite(percent)?);
    Ok(format!("{:+.*}%", DECIMALS, percent))
}

/// Walk up `units` until the mantissa is below `base`.
///
/// Selection uses the absolute value; the sign is carried through. A mantissa
/// that would print as `base` after rounding is promoted one more step.
fn scale(value: f64, base: f64, units: &[&str]) -> String {
    let last = units.len() - 1;
    let mut mantissa = value;
    let mut idx = 0;

    while mantissa.abs() >= base && idx < last {
        mantissa /= base;
        idx += 1;
    }

    if idx < last && round_to_decimals(mantissa.abs()) >= base {
        mantissa /= base;
        idx += 1;
    }

    format!("{:.*} {}", DECIMALS, normalize_zero(mantissa), units[idx])
}

fn round_to_decimals(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMALS as i32);
    (value * factor).round() / factor
}

// Anything that prints as zero drops its sign, so no "-0.00".
fn normalize_zero(value: f64) -> f64 {
    if round_to_decimals(value) == 0.0 { 0.0 } else { value }
}
