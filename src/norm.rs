//! Scaling, bounding and rounding helpers shared by the calculators.

use std::ops::RangeInclusive;

/// Upper end of every normalised score.
pub const FULL_MARK: f64 = 100.0;

/// Expresses `value` as a percentage of `benchmark`, capped at [`FULL_MARK`].
#[inline]
pub fn normalize(value: f64, benchmark: f64) -> f64 {
    f64::min(FULL_MARK, value / benchmark * FULL_MARK)
}

#[inline]
pub fn clamp(value: f64, bounds: &RangeInclusive<f64>) -> f64 {
    f64::min(f64::max(value, *bounds.start()), *bounds.end())
}

/// Rounds to the nearest integer, with halves going towards positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to the given number of decimal places, with halves going towards positive infinity.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}
