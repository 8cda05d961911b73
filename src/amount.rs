//! Currency-unit conversion between rand (major unit) and kobo (minor unit).
//!
//! Paystack expresses all amounts in the smallest currency unit; callers work
//! in the major unit. The forward conversion truncates toward zero, so
//! fractional kobo are dropped rather than rounded. The reverse conversion is
//! plain division.

/// Converts a major-unit amount to the gateway's minor unit.
pub fn to_minor_units(major: f64) -> i64 {
    (major * 100.0) as i64
}

/// Converts a gateway minor-unit amount back to the major unit.
pub fn to_major_units(minor: f64) -> f64 {
    minor / 100.0
}
