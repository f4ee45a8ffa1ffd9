//! Sign utilities for root-finding algorithms.
//! - `sign`          : three-valued sign, `0` for `±0.0`
//! - `opposite_sign` : `true` if the three-valued signs differ

/// Returns `-1`, `0` or `1`. Both zeros map to `0`.
#[inline]
pub(crate) fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}


/// Returns `true` if `x` and `y` have different three-valued signs.
/// A zero against a non-zero value counts as a sign change.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    sign(x) != sign(y)
}
