use crate::model::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("could not place {nodes} nodes without overlap after {passes} passes")]
    PlacementDidNotConverge { passes: usize, nodes: usize },
    #[error("edge {edge} references a missing node: {id}")]
    EdgeEndpointNotFound { edge: usize, id: NodeId },
    #[error("invalid layout input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
