use crate::layered::NodeAnchors;
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute anchor points for graph nodes
///
/// This trait is generic over the graph type `G`, allowing different layout
/// engines to state their own graph requirements: the layered engine works
/// with any directed graph exposing petgraph's visitor traits, other engines
/// can ask for less.
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Ord + Hash;

    /// Error produced when the graph violates the engine's constraints
    type Error;

    /// Compute anchor points for every node of the given graph
    ///
    /// # Errors
    /// Returns an error if the layout computation fails (e.g. the graph
    /// contains a cycle for DAG layouts)
    fn layout(&self, graph: G) -> Result<HashMap<Self::NodeId, NodeAnchors>, Self::Error>;
}
