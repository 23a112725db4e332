mod layers;
mod positions;

use crate::{LayoutEngine, Vec2};
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

use layers::assign_layers;
use positions::assign_anchors;

pub use positions::NodeAnchors;

/// Errors that can occur during layered layout computation
#[derive(Debug, Error)]
pub enum LayeredLayoutError<N>
where
    N: fmt::Debug,
{
    /// The graph contains at least one cycle; the listed nodes never became
    /// free during layering
    #[error("graph contains a cycle through nodes {0:?}")]
    GraphHasCycle(Vec<N>),
}

/// Configuration for the layered DAG layout
#[derive(Debug, Clone)]
pub struct DagLayout {
    /// Canvas dimensions the layout is spread across
    pub canvas: Vec2,

    /// Rendered node box size; the width offsets the outgoing anchor from
    /// the incoming one, the full box feeds the label scale computation
    pub node_size: Vec2,

    /// Gap left between an edge's drawn end and the target anchor, reserved
    /// for the arrowhead marker
    pub arrow_clearance: f32,
}

impl Default for DagLayout {
    fn default() -> Self {
        Self {
            canvas: Vec2::new(500.0, 500.0),
            node_size: Vec2::new(40.0, 20.0),
            arrow_clearance: 3.0,
        }
    }
}

impl DagLayout {
    /// Create a layout for the given canvas size
    pub fn new(canvas: Vec2) -> Self {
        Self {
            canvas,
            ..Default::default()
        }
    }
}

/// Nodes organized into topological layers
///
/// Layer 0 holds the initial sources; every later layer holds the nodes
/// whose in-degree reached zero in that round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers<N> {
    pub nodes: Vec<Vec<N>>,
}

impl DagLayout {
    /// Assign every node to a topological layer
    ///
    /// # Errors
    /// Fails if the graph contains a cycle; the error lists the nodes that
    /// never became free.
    pub fn compute_layers<G>(
        &self,
        graph: G,
    ) -> Result<Layers<G::NodeId>, LayeredLayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Ord + Hash + fmt::Debug,
    {
        Ok(Layers {
            nodes: assign_layers(graph)?,
        })
    }

    /// Spread layered nodes across the canvas
    ///
    /// Pure anchor math over the layer structure; the id join lives in
    /// [`DagLayout::position`](crate::DagLayout::position).
    pub fn compute_anchors<N>(&self, layers: &Layers<N>) -> HashMap<N, NodeAnchors>
    where
        N: Copy + Eq + Hash,
    {
        assign_anchors(&layers.nodes, self.canvas, self.node_size.x)
    }
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for DagLayout
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    type NodeId = G::NodeId;
    type Error = LayeredLayoutError<G::NodeId>;

    fn layout(&self, graph: G) -> Result<HashMap<Self::NodeId, NodeAnchors>, Self::Error> {
        let layers = self.compute_layers(graph)?;
        Ok(self.compute_anchors(&layers))
    }
}
