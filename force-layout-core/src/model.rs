//! Graph input and layout output types.
//!
//! These mirror the JSON the UI sends in and expects back, so field names
//! follow the frontend's camelCase where they differ from Rust's.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stroke color used when a node doesn't specify one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Opaque node identity. The frontend uses both numeric and string ids.
///
/// Integers land in `Number`; any other JSON number (`1.5`, `1.0`, values
/// beyond `i64`) lands in `Decimal`, so `1` and `1.0` are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(i64),
    Decimal(serde_json::Number),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{}", n),
            NodeId::Decimal(n) => write!(f, "{}", n),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Number(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

/// Outline drawn for a node. Anything but `"rectangle"`, including
/// non-string values, falls back to a circle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<serde_json::Value>")]
pub enum Shape {
    #[default]
    Circle,
    Rectangle,
}

impl From<Option<serde_json::Value>> for Shape {
    fn from(value: Option<serde_json::Value>) -> Self {
        match value.as_ref().and_then(serde_json::Value::as_str) {
            Some("rectangle") => Shape::Rectangle,
            _ => Shape::Circle,
        }
    }
}

/// A graph vertex as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub shape: Shape,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
            shape: Shape::Circle,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A reference pair between two node ids. Only drawn, never simulated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
}

impl Edge {
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>) -> Self {
        Self {
            start_node_id: start.into(),
            end_node_id: end.into(),
        }
    }
}

/// Computed placement of a node, with its display attributes carried along
/// so the renderer doesn't have to look the node up again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
    pub shape: Shape,
}

impl Position {
    pub fn at(node: &Node, x: f64, y: f64) -> Self {
        Self {
            id: node.id.clone(),
            x,
            y,
            label: node.label.clone(),
            color: node
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            shape: node.shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defaults() {
        let node: Node = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(node.id, NodeId::Number(1));
        assert_eq!(node.label, "");
        assert_eq!(node.shape, Shape::Circle);

        let pos = Position::at(&node, 0.0, 0.0);
        assert_eq!(pos.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_empty_color_uses_default() {
        let node: Node = serde_json::from_str(r#"{"id": 1, "color": ""}"#).unwrap();
        assert_eq!(Position::at(&node, 0.0, 0.0).color, DEFAULT_COLOR);
    }

    #[test]
    fn test_non_string_shape_is_circle() {
        for raw in [r#"{"id": 1, "shape": 5}"#, r#"{"id": 1, "shape": false}"#, r#"{"id": 1, "shape": {}}"#] {
            let node: Node = serde_json::from_str(raw).unwrap();
            assert_eq!(node.shape, Shape::Circle);
        }
    }

    #[test]
    fn test_fractional_ids() {
        let node: Node = serde_json::from_str(r#"{"id": 1.5}"#).unwrap();
        assert!(matches!(node.id, NodeId::Decimal(_)));
        assert_eq!(node.id.to_string(), "1.5");

        let edge: Edge = serde_json::from_str(r#"{"startNodeId": 1.5, "endNodeId": 2}"#).unwrap();
        assert_eq!(edge.start_node_id, node.id);
        assert_eq!(edge.end_node_id, NodeId::Number(2));
    }

    #[test]
    fn test_unknown_shape_is_circle() {
        let node: Node =
            serde_json::from_str(r#"{"id": "a", "label": "A", "shape": "hexagon"}"#).unwrap();
        assert_eq!(node.shape, Shape::Circle);

        let node: Node = serde_json::from_str(r#"{"id": "b", "shape": "rectangle"}"#).unwrap();
        assert_eq!(node.shape, Shape::Rectangle);

        let node: Node = serde_json::from_str(r#"{"id": "c", "shape": null}"#).unwrap();
        assert_eq!(node.shape, Shape::Circle);
    }

    #[test]
    fn test_edge_wire_names() {
        let edge: Edge = serde_json::from_str(r#"{"startNodeId": 1, "endNodeId": "x"}"#).unwrap();
        assert_eq!(edge.start_node_id, NodeId::Number(1));
        assert_eq!(edge.end_node_id, NodeId::Text("x".to_string()));
    }

    #[test]
    fn test_position_serializes_shape_lowercase() {
        let node = Node::new(7_i64, "seven").with_shape(Shape::Rectangle).with_color("#ff0000");
        let json = serde_json::to_value(Position::at(&node, 1.5, 2.0)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["shape"], "rectangle");
        assert_eq!(json["color"], "#ff0000");
    }
}
