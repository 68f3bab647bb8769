//! WASM bindings for the force-layout-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use log::{Level, error, info};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::layout::{LayoutConfig, compute_layout_seeded, compute_layout_with_entropy};
use crate::model::{Edge, Node};
use crate::output::LayoutOutput;

/// Graph description sent by the frontend.
#[derive(Debug, Deserialize)]
struct LayoutRequest {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    config: LayoutConfig,
    /// Fixed seed for reproducible layouts. Fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

/// Route `log` output to the browser console and report panics there.
#[wasm_bindgen]
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    info!("Logging initialized");
}

/// Lay out the graph in `input` for a `width` x `height` canvas.
///
/// Always returns a serialized `LayoutOutput`; failures are reported in its
/// `error` field.
#[wasm_bindgen]
pub fn compute_layout(input: &str, width: f64, height: f64) -> String {
    let output = match layout_request(input, width, height) {
        Ok(output) => output,
        Err(e) => {
            error!("Error computing layout: {}", e);
            LayoutOutput::from_error(&e)
        }
    };
    serde_json::to_string(&output)
        .unwrap_or_else(|e| format!("{{\"error\": {{\"message\": \"{}\"}}}}", e))
}

fn layout_request(input: &str, width: f64, height: f64) -> Result<LayoutOutput> {
    let req: LayoutRequest = serde_json::from_str(input)?;
    let positions = match req.seed {
        Some(seed) => compute_layout_seeded(&req.nodes, &req.edges, width, height, &req.config, seed)?,
        None => compute_layout_with_entropy(&req.nodes, &req.edges, width, height, &req.config)?,
    };
    LayoutOutput::build(positions, &req.edges)
}
