// Fixed-step force refinement.
//
// Every node feels a force from every other node, edges or not. Updates are
// sequential: node i is moved and clamped before node i + 1 computes its
// forces, so later nodes in a step see earlier nodes' new coordinates.

use log::debug;

use super::LayoutConfig;
use super::geometry::{angle_between, clamp_to_viewport, distance, force};
use crate::model::Position;

/// Run `cfg.iterations` refinement steps over `positions` in place.
///
/// The force between a pair is `force(d)` applied along the direction from
/// the moving node to the other one, with a unit step and no damping.
/// Each node is clamped to `[radius, extent - radius]` right after it moves.
pub fn refine(positions: &mut [Position], width: f64, height: f64, cfg: &LayoutConfig) {
    for _ in 0..cfg.iterations {
        for i in 0..positions.len() {
            let (fx, fy) = net_force(positions, i, cfg.edge_length);

            let node = &mut positions[i];
            node.x = clamp_to_viewport(node.x + fx, cfg.radius, width);
            node.y = clamp_to_viewport(node.y + fy, cfg.radius, height);
        }
    }
    debug!("refined {} nodes over {} steps", positions.len(), cfg.iterations);
}

/// By-value form of [`refine`].
pub fn refined(mut positions: Vec<Position>, width: f64, height: f64, cfg: &LayoutConfig) -> Vec<Position> {
    refine(&mut positions, width, height, cfg);
    positions
}

/// Sum of the forces every other node exerts on node `i`.
fn net_force(positions: &[Position], i: usize, edge_length: f64) -> (f64, f64) {
    let me = &positions[i];
    let mut fx = 0.0;
    let mut fy = 0.0;

    for (j, other) in positions.iter().enumerate() {
        if i == j {
            continue;
        }
        let f = force(distance(me, other), edge_length);
        let angle = angle_between(me, other);
        fx += f * angle.cos();
        fy += f * angle.sin();
    }

    (fx, fy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn pos(id: i64, x: f64, y: f64) -> Position {
        Position::at(&Node::new(id, ""), x, y)
    }

    fn in_bounds(p: &Position, width: f64, height: f64, r: f64) -> bool {
        p.x >= r && p.x <= width - r && p.y >= r && p.y <= height - r
    }

    #[test]
    fn test_single_node_only_clamped() {
        let cfg = LayoutConfig::default();

        let mut inside = vec![pos(1, 200.0, 120.0)];
        refine(&mut inside, 400.0, 400.0, &cfg);
        assert_eq!((inside[0].x, inside[0].y), (200.0, 120.0));

        let mut outside = vec![pos(1, 5.0, 399.0)];
        refine(&mut outside, 400.0, 400.0, &cfg);
        assert_eq!((outside[0].x, outside[0].y), (50.0, 350.0));
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let cfg = LayoutConfig {
            iterations: 0,
            ..LayoutConfig::default()
        };
        let original = vec![pos(1, 0.0, 0.0), pos(2, 1000.0, 1000.0)];
        let out = refined(original.clone(), 400.0, 400.0, &cfg);
        assert_eq!(out, original);
    }

    #[test]
    fn test_updates_are_sequential() {
        // One step, two nodes 20 apart on x with edge_length 10:
        // force(20) = -1 along 0 -> 1, so node 0 moves 1 to the left.
        // Node 1 then sees distance 21: force = -1.1 along 1 -> 0,
        // i.e. 1.1 to the right. A batched update would give 1.0.
        let cfg = LayoutConfig {
            iterations: 1,
            ..LayoutConfig::default()
        };
        let mut positions = vec![pos(1, 190.0, 200.0), pos(2, 210.0, 200.0)];
        refine(&mut positions, 400.0, 400.0, &cfg);

        assert!((positions[0].x - 189.0).abs() < 1e-9);
        assert!((positions[1].x - 211.1).abs() < 1e-9);
        assert!((positions[0].y - 200.0).abs() < 1e-9);
        assert!((positions[1].y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_stays_in_viewport() {
        let cfg = LayoutConfig::default();
        let mut positions: Vec<Position> = (0..9)
            .map(|i| pos(i, (i as f64) * 37.0 - 50.0, 500.0 - (i as f64) * 61.0))
            .collect();
        refine(&mut positions, 640.0, 480.0, &cfg);
        for p in &positions {
            assert!(in_bounds(p, 640.0, 480.0, cfg.radius), "{:?}", p);
        }
    }

    #[test]
    fn test_tiny_viewport_pins_to_radius() {
        let cfg = LayoutConfig::default();
        let mut positions = vec![pos(1, 0.0, 0.0), pos(2, 0.0, 0.0)];
        refine(&mut positions, 0.0, 0.0, &cfg);
        for p in &positions {
            assert_eq!((p.x, p.y), (50.0, 50.0));
        }
    }
}
