//! Geometric comparisons between fitted lines.

// External dependencies
use num_traits::Float;

/// Angle in degrees between two lines given by their slopes.
///
/// Uses the normalized dot product of the direction vectors `(1, m1)` and
/// `(1, m2)`. The cosine is clamped to `[-1, 1]` before `acos` so rounding
/// cannot produce NaN. An infinite slope is treated as a vertical direction.
pub fn angle_between_slopes<T: Float>(slope1: T, slope2: T) -> T {
    let (ax, ay) = direction(slope1);
    let (bx, by) = direction(slope2);

    let cos = (ax * bx + ay * by).max(-T::one()).min(T::one());
    cos.acos().to_degrees()
}

/// Unit direction vector of a line with slope `m`.
fn direction<T: Float>(m: T) -> (T, T) {
    if m.is_infinite() {
        return (T::zero(), m.signum());
    }
    let norm = (T::one() + m * m).sqrt();
    (T::one() / norm, m / norm)
}
