// Node lookup for edge resolution.
//
// Layout never reads edges, but anything drawing them has to map each
// endpoint id back to a computed position. A missing endpoint is an error,
// not something to skip.

use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::model::{Edge, Node, NodeId, Position};

/// Map from node id to its index in the node/position list.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a NodeId, usize>,
}

impl<'a> NodeIndex<'a> {
    /// Index a sequence of ids. On duplicates the first occurrence wins.
    pub fn from_ids(ids: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let mut by_id = HashMap::new();
        for (idx, id) in ids.into_iter().enumerate() {
            by_id.entry(id).or_insert(idx);
        }
        Self { by_id }
    }

    pub fn from_nodes(nodes: &'a [Node]) -> Self {
        Self::from_ids(nodes.iter().map(|n| &n.id))
    }

    pub fn from_positions(positions: &'a [Position]) -> Self {
        Self::from_ids(positions.iter().map(|p| &p.id))
    }

    pub fn get(&self, id: &NodeId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Resolve edge number `edge_idx` to `(start, end)` indices.
    pub fn resolve(&self, edge_idx: usize, edge: &Edge) -> Result<(usize, usize)> {
        let lookup = |id: &NodeId| {
            self.get(id).ok_or_else(|| LayoutError::EdgeEndpointNotFound {
                edge: edge_idx,
                id: id.clone(),
            })
        };
        Ok((lookup(&edge.start_node_id)?, lookup(&edge.end_node_id)?))
    }
}

/// Check that every edge endpoint names an existing node.
pub fn validate_edges(nodes: &[Node], edges: &[Edge]) -> Result<()> {
    let index = NodeIndex::from_nodes(nodes);
    for (i, edge) in edges.iter().enumerate() {
        index.resolve(i, edge)?;
    }
    Ok(())
}
