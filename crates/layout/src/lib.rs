//! Layered DAG layout algorithms
//!
//! This crate computes render-ready geometry for directed acyclic graphs:
//! nodes are grouped into topological layers, layers are spread across a
//! canvas with separate incoming/outgoing anchor points per node, and edge
//! lines are trimmed so an arrowhead marker can be drawn in front of the
//! target box.
//!
//! The layering and anchor math are generic over petgraph's visitor traits;
//! [`GraphIndex`] ties them to caller-supplied string ids.
//!
//! # Example
//!
//! ```
//! use dag_layout::{DagLayout, GraphIndex, InputEdge, InputNode};
//!
//! let nodes = vec![
//!     InputNode::new("a", "source"),
//!     InputNode::new("b", "sink"),
//! ];
//! let edges = vec![InputEdge::new("a", "b")];
//!
//! let index = GraphIndex::build(nodes, &edges).unwrap();
//! let positioned = DagLayout::default().position(&index).unwrap();
//!
//! assert_eq!(positioned.nodes().len(), 2);
//! let pairs = positioned.positioned_edges(&edges).unwrap();
//! assert_eq!(pairs[0].key(), "edge_a_b");
//! ```

mod edges;
mod engine;
mod geometry;
mod graph;
mod measure;
mod positioned;

pub mod layered;

// Re-export core types and traits
pub use edges::{trim_segment, PositionedEdge};
pub use engine::LayoutEngine;
pub use geometry::{Point, Vec2};
pub use graph::{GraphIndex, InputEdge, InputNode};
pub use measure::LabelMetrics;
pub use positioned::{PositionedNode, PositionedNodes};

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
pub use petgraph::Direction;

// Re-export layered layout types
pub use layered::{DagLayout, LayeredLayoutError, Layers, NodeAnchors};

use thiserror::Error;

/// Errors raised while indexing or laying out a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An edge referenced a node id that was never registered
    #[error("unknown node id `{0}`")]
    UnknownNode(String),

    /// Nodes that never reached in-degree zero during layering; they are
    /// part of a cycle or only reachable through one
    #[error("graph contains a cycle through nodes {0:?}")]
    CyclicGraph(Vec<String>),
}
