use dag_layout::{DagLayout, InputEdge, LayoutError, Point, PositionedNodes};
use derive_more::From;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, From)]
pub struct ScenePoint {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for ScenePoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// A node box ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: String,
    pub label: String,
    pub layer: usize,
    pub incoming: ScenePoint,
    pub outgoing: ScenePoint,

    /// Font scale fitting the label into the node box, when measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    pub selected: bool,
}

/// An edge line with its arrowhead endpoint resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneEdge {
    /// Stable rendering key, `edge_<source>_<target>`
    pub id: String,
    pub start: ScenePoint,
    pub end: ScenePoint,
}

/// Everything the renderer needs to draw one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// Assemble the scene for a positioned graph
    ///
    /// `selected` is the caller-held click-selection set; the layout core
    /// owns no interaction state.
    ///
    /// # Errors
    /// Propagates [`LayoutError::UnknownNode`] from the edge join.
    pub fn build(
        layout: &DagLayout,
        positioned: &PositionedNodes,
        edges: &[InputEdge],
        selected: &HashSet<String>,
    ) -> Result<Self, LayoutError> {
        let pairs = positioned.positioned_edges(edges)?;
        debug!(
            "Building scene with {} nodes and {} edges",
            positioned.nodes().len(),
            pairs.len()
        );

        let nodes = positioned
            .nodes()
            .iter()
            .map(|node| SceneNode {
                id: node.id.clone(),
                label: node.display_name.clone(),
                layer: node.layer,
                incoming: node.incoming.into(),
                outgoing: node.outgoing.into(),
                scale: node.scale,
                selected: selected.contains(&node.id),
            })
            .collect();

        let edges = pairs
            .iter()
            .map(|edge| SceneEdge {
                id: edge.key(),
                start: edge.start().into(),
                end: edge.arrow_endpoint(layout.arrow_clearance).into(),
            })
            .collect();

        Ok(Self { nodes, edges })
    }
}
