//! Angle wrapping for solver output.

use std::f64::consts::PI;

/// Wrap an angle onto the principal branch.
///
/// Reduces `a` modulo 2π (the remainder keeps the sign of `a`, like C's
/// `fmod`), then shifts by −2π if the result still exceeds π. Non-negative
/// inputs land in `(−π, π]`; the sign-preserving remainder means an input
/// below −π comes back unreduced past the lower branch cut rather than
/// being lifted into it.
///
/// Idempotent: wrapping a wrapped angle is a no-op.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let mut a = a % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    }
    a
}
