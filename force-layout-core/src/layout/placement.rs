// Initial placement with overlap resolution.
//
// Nodes are scattered uniformly over the viewport, then overlapping pairs are
// nudged apart along the line between their centers. A pass scans every
// unordered pair once and applies each nudge immediately, so a fix for one
// pair can break another already-checked pair. Passes repeat until one
// finds nothing to fix, up to a configured cap.

use log::{debug, warn};
use rand::Rng;

use super::LayoutConfig;
use super::geometry::{angle_between, distance};
use crate::error::{LayoutError, Result};
use crate::model::{Node, Position};

/// Relative slack on the separation check. Without it, pairs left a rounding
/// error short of `min_distance` get shifts too small to move coordinates
/// and the passes never settle.
const SEPARATION_TOLERANCE: f64 = 1e-9;

/// Place every node at an independent uniform sample inside the viewport.
///
/// Samples are scaled from `[0, 1)`, so a zero-sized dimension collapses to
/// the origin instead of being rejected.
pub fn scatter<R: Rng + ?Sized>(nodes: &[Node], width: f64, height: f64, rng: &mut R) -> Vec<Position> {
    nodes
        .iter()
        .map(|node| {
            let x = rng.r#gen::<f64>() * width;
            let y = rng.r#gen::<f64>() * height;
            Position::at(node, x, y)
        })
        .collect()
}

/// Push overlapping positions apart until no two centers are closer than
/// `cfg.min_distance()`, up to a relative rounding slack of 1e-9.
///
/// Returns how many passes found at least one overlap. Fails when the pass
/// after `cfg.max_placement_passes` overlapping passes still finds one.
pub fn resolve_collisions(positions: &mut [Position], cfg: &LayoutConfig) -> Result<usize> {
    let min_distance = cfg.min_distance();

    for pass in 0..=cfg.max_placement_passes {
        if !separate_pass(positions, min_distance) {
            return Ok(pass);
        }
    }

    warn!(
        "placement gave up after {} passes with {} nodes",
        cfg.max_placement_passes,
        positions.len()
    );
    Err(LayoutError::PlacementDidNotConverge {
        passes: cfg.max_placement_passes,
        nodes: positions.len(),
    })
}

/// One full scan over all pairs. Returns whether anything overlapped.
fn separate_pass(positions: &mut [Position], min_distance: f64) -> bool {
    let mut has_overlap = false;
    let limit = min_distance * (1.0 - SEPARATION_TOLERANCE);

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let d = distance(&positions[i], &positions[j]);
            // NaN (non-finite viewport) never counts as an overlap.
            if d.is_nan() || d >= limit {
                continue;
            }
            has_overlap = true;

            // Direction from j towards i; i moves along it, j against it.
            let angle = angle_between(&positions[j], &positions[i]);
            let shift = (min_distance - d) / 2.0;
            let (sx, sy) = (angle.cos() * shift, angle.sin() * shift);

            positions[i].x += sx;
            positions[i].y += sy;
            positions[j].x -= sx;
            positions[j].y -= sy;
        }
    }

    has_overlap
}

/// Scatter `nodes` over the viewport and resolve overlaps.
pub fn resolve_placement<R: Rng + ?Sized>(
    nodes: &[Node],
    width: f64,
    height: f64,
    cfg: &LayoutConfig,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let mut positions = scatter(nodes, width, height, rng);
    let passes = resolve_collisions(&mut positions, cfg)?;
    debug!("placed {} nodes after {} collision passes", positions.len(), passes);
    Ok(positions)
}
