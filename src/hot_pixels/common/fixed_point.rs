//! Fixed-point intensity scale.
//!
//! Relative values (thresholds, luminosities) live on a scale whose full range
//! is [`DENOM`]. Conversions to the absolute sample domain round to nearest.

pub const DENOM_SQRT: u64 = 10_000;

/// Full scale of relative values.
pub const DENOM: u64 = DENOM_SQRT * DENOM_SQRT;

/// Converts a relative value `n` (on the `DENOM` scale) into the absolute
/// domain `0..=max`, rounding to nearest.
pub fn rel_to_abs(n: u64, max: u64) -> u64 {
    (n * max + DENOM / 2) / DENOM
}

/// Maps an absolute sample onto the `DENOM` scale.
///
/// Matches the integer arithmetic of the black frame parser, so the full-scale
/// sample lands slightly below `DENOM` (e.g. 99_999_907 for 8-bit).
pub fn abs_to_luminosity(value: u64, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    ((2 * DENOM) / max) * value / 2
}
