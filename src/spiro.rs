// Hypotrochoid math: the curve traced by a pen on a wheel of radius r rolling
// inside a fixed ring of radius R, with the pen d away from the wheel center.
//
//   x(t) = (R - r)·cos(t) + d·cos((R - r)·t / r)
//   y(t) = (R - r)·sin(t) - d·sin((R - r)·t / r)
//
// The curve closes after r / gcd(R, r) full turns of t.

use crate::types::{Point, PointSequence};
use std::f64::consts::TAU;

/// Divisor used in place of a zero inner radius.
const MIN_INNER: f64 = 0.001;

/// Euclid's gcd; `gcd(0, n) == n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of inner-wheel loops before the curve closes.
/// Both radii are rounded to the nearest integer and floored at 1.
pub fn get_period(outer: f64, inner: f64) -> u64 {
    let ri = (inner.round_ties_even() as i64).max(1) as u64;
    let oi = (outer.round_ties_even() as i64).max(1) as u64;
    ri / gcd(oi, ri).max(1)
}

/// Sample `steps + 1` points uniformly over `[0, 2π·period]`, endpoints included.
/// Result is centered on the origin and not scaled.
pub fn compute_points(outer: f64, inner: f64, offset: f64, steps: usize) -> PointSequence {
    let loops = get_period(outer, inner);
    let total_t = TAU * loops as f64;
    let steps = steps.max(1);
    let diff = outer - inner;
    let ratio_div = inner.max(MIN_INNER);

    (0..=steps)
        .map(|i| {
            let t = total_t * i as f64 / steps as f64;
            let wheel = diff * t / ratio_div;
            Point::new(
                diff * t.cos() + offset * wheel.cos(),
                diff * t.sin() - offset * wheel.sin(),
            )
        })
        .collect()
}
