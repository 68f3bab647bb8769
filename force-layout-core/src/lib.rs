//! Force-directed graph layout for canvas rendering.
//!
//! Given nodes, edges and a viewport size, [`layout::compute_layout`] places
//! every node so that no two overlap, then refines the placement with a fixed
//! number of all-pairs force steps while keeping every node inside the
//! viewport. Drawing is left to the caller; [`output::LayoutOutput`] pairs the
//! positions with resolved edge segments ready to stroke.

pub mod error;
pub mod layout;
pub mod model;
pub mod output;
mod wasm;

pub use error::{LayoutError, Result};
pub use layout::{
    LayoutConfig, compute_layout, compute_layout_seeded, compute_layout_with_entropy,
};
pub use model::{DEFAULT_COLOR, Edge, Node, NodeId, Position, Shape};
pub use output::{EdgeSegment, LayoutOutput};
pub use wasm::init_logging;
