// Geometry and force-law helpers shared by placement and refinement.

use crate::model::Position;

/// Euclidean distance between two node centers.
pub fn distance(a: &Position, b: &Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Direction from `from` to `to`, in radians.
pub fn angle_between(from: &Position, to: &Position) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Force magnitude at distance `d`: zero at `edge_length`, positive inside it,
/// negative beyond it.
pub fn force(d: f64, edge_length: f64) -> f64 {
    (edge_length - d) / edge_length
}

/// Keep a coordinate at least `radius` away from both edges of `[0, extent]`.
///
/// The upper bound is applied first, so an extent smaller than `2 * radius`
/// pins the coordinate at `radius` rather than panicking like `f64::clamp`.
pub fn clamp_to_viewport(v: f64, radius: f64, extent: f64) -> f64 {
    v.min(extent - radius).max(radius)
}
