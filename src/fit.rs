// Fits an origin-centered point sequence into a square pixel region.

use crate::types::{Point, PointSequence};

/// Largest |coordinate| over all points, floored at 1.
pub fn max_extent(points: &[Point]) -> f64 {
    points
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs()])
        .fold(1.0_f64, f64::max)
}

/// Uniform scale + translation so every point lands in
/// `[margin, canvas_size - margin]` on both axes, centered on the square.
pub fn fit_to_canvas(points: &[Point], canvas_size: f64, margin: f64) -> PointSequence {
    let half = canvas_size / 2.0;
    let scale = (half - margin) / max_extent(points);
    points
        .iter()
        .map(|p| Point::new(half + p.x * scale, half + p.y * scale))
        .collect()
}
