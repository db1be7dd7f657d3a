//! Easing curve used to shape horizontal drift.

/// Quadratic ease-in-out.
///
/// Maps `[0, 1]` onto `[0, 1]` with matching slopes (2.0) on both sides of
/// `x = 0.5`. Inputs outside `[0, 1]` extrapolate through the same branches;
/// tweens briefly evaluate past 1.0 in the tick their clock expires.
#[inline]
pub fn ease_in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        2.0 * x * (2.0 - x) - 1.0
    }
}
