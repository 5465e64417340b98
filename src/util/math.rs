//! Numeric helpers shared by area and overlap computations.

/// Length of the overlap between `[a0, a1]` and `[b0, b1]`, clamped at zero.
pub(crate) fn overlap_1d(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Divides, returning zero when the denominator is not positive.
pub(crate) fn divide_no_nan(num: f32, denom: f32) -> f32 {
    if denom > 0.0 {
        num / denom
    } else {
        0.0
    }
}
