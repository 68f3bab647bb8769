// Force-directed layout for canvas rendering.
//
// Pipeline:
// - placement: scatter nodes randomly, then push overlapping pairs apart
//   until every pair of centers is at least 2 * radius apart
// - force_placement: fixed number of all-pairs force steps, each node
//   clamped to the viewport right after it moves
//
// The whole layout is recomputed from scratch for every call; nothing
// carries over between calls except what the caller passes in.
//
// Submodules:
// - geometry: distance, angle, force law, clamping
// - adjacency: node id lookup for resolving edges against positions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

pub mod adjacency;
pub mod force_placement;
pub mod geometry;
pub mod placement;

use crate::error::Result;
use crate::model::{Edge, Node, Position};

pub use adjacency::{NodeIndex, validate_edges};
pub use force_placement::{refine, refined};
pub use placement::{resolve_collisions, resolve_placement, scatter};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Node radius. Used for collision separation and viewport clamping.
    pub radius: f64,
    /// Distance at which the pairwise force is zero.
    pub edge_length: f64,
    /// Number of refinement steps.
    pub iterations: usize,
    /// Upper bound on overlapping placement passes before giving up.
    pub max_placement_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            edge_length: 10.0,
            iterations: 100,
            max_placement_passes: 10_000,
        }
    }
}

impl LayoutConfig {
    /// Minimum center-to-center distance enforced during placement.
    pub fn min_distance(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Lay out `nodes` inside a `width` x `height` viewport.
///
/// Returns one position per node, in input order. `edges` is accepted so
/// callers can pass the whole graph, but it has no effect on positions.
pub fn compute_layout<R: Rng + ?Sized>(
    nodes: &[Node],
    _edges: &[Edge],
    width: f64,
    height: f64,
    cfg: &LayoutConfig,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let positions = resolve_placement(nodes, width, height, cfg, rng)?;
    Ok(refined(positions, width, height, cfg))
}

/// [`compute_layout`] with a generator seeded from OS entropy.
pub fn compute_layout_with_entropy(
    nodes: &[Node],
    edges: &[Edge],
    width: f64,
    height: f64,
    cfg: &LayoutConfig,
) -> Result<Vec<Position>> {
    let mut rng = StdRng::from_entropy();
    compute_layout(nodes, edges, width, height, cfg, &mut rng)
}

/// [`compute_layout`] with a fixed seed. Same inputs give identical output.
pub fn compute_layout_seeded(
    nodes: &[Node],
    edges: &[Edge],
    width: f64,
    height: f64,
    cfg: &LayoutConfig,
    seed: u64,
) -> Result<Vec<Position>> {
    let mut rng = StdRng::seed_from_u64(seed);
    compute_layout(nodes, edges, width, height, cfg, &mut rng)
}
