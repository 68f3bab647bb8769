//! Output types for frontend consumption.
//!
//! These structs are serialized to JSON and handed to the canvas renderer,
//! which strokes each edge segment and then draws each node on top.

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::layout::NodeIndex;
use crate::model::{Edge, NodeId, Position};

/// A straight edge between two resolved node centers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSegment {
    pub from: NodeId,
    pub to: NodeId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Error details for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined output sent to the frontend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayoutOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Position>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LayoutOutput {
    /// Pair computed positions with edge segments. Fails on the first edge
    /// whose endpoint has no position.
    pub fn build(positions: Vec<Position>, edges: &[Edge]) -> Result<Self> {
        let segments = {
            let index = NodeIndex::from_positions(&positions);
            edges
                .iter()
                .enumerate()
                .map(|(i, edge)| {
                    let (s, e) = index.resolve(i, edge)?;
                    let (start, end) = (&positions[s], &positions[e]);
                    Ok(EdgeSegment {
                        from: start.id.clone(),
                        to: end.id.clone(),
                        x1: start.x,
                        y1: start.y,
                        x2: end.x,
                        y2: end.y,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            nodes: positions,
            edges: segments,
            error: None,
        })
    }

    pub fn from_error(err: &LayoutError) -> Self {
        Self {
            error: Some(ErrorInfo {
                message: err.to_string(),
            }),
            ..Self::default()
        }
    }
}
