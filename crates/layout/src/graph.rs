use crate::LayoutError;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A node supplied by the caller
///
/// Ids are expected to be unique across the input set; the index does not
/// police duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNode {
    pub id: String,
    pub display_name: String,
}

impl InputNode {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A directed edge between two caller-supplied node ids
///
/// Parallel edges between the same pair are allowed and kept distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEdge {
    pub source_id: String,
    pub target_id: String,
}

impl InputEdge {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
        }
    }
}

/// Adjacency and lookup views over the caller's node and edge lists
///
/// Built once and read-only afterward. The petgraph representation drives
/// the layering pass; node insertion order there fixes the row order inside
/// each layer. The successor lists preserve edge input order for callers
/// that need it.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, InputNode>,
    successors: HashMap<String, Vec<String>>,
}

impl GraphIndex {
    /// Index the given nodes and edges
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if an edge references an id that
    /// is not in the node list.
    pub fn build(
        nodes: impl IntoIterator<Item = InputNode>,
        edges: &[InputEdge],
    ) -> Result<Self, LayoutError> {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        let mut by_id = HashMap::new();

        for node in nodes {
            let index = graph.add_node(node.id.clone());
            indices.insert(node.id.clone(), index);
            by_id.insert(node.id.clone(), node);
        }

        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        for edge in edges {
            let source = resolve(&indices, &edge.source_id)?;
            let target = resolve(&indices, &edge.target_id)?;
            graph.add_edge(source, target, ());
            successors
                .entry(edge.source_id.clone())
                .or_default()
                .push(edge.target_id.clone());
        }

        Ok(Self {
            graph,
            nodes: by_id,
            successors,
        })
    }

    /// Direct successor ids of a node, in edge input order
    ///
    /// Empty for nodes with no outgoing edges.
    pub fn successors_of(&self, id: &str) -> &[String] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a node by id
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] for ids that were never
    /// registered.
    pub fn node_by_id(&self, id: &str) -> Result<&InputNode, LayoutError> {
        self.nodes
            .get(id)
            .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))
    }

    /// The petgraph view consumed by the layering pass
    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// The id stored at a petgraph node index
    pub fn id_of(&self, index: NodeIndex) -> &str {
        self.graph[index].as_str()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

fn resolve(indices: &HashMap<String, NodeIndex>, id: &str) -> Result<NodeIndex, LayoutError> {
    indices
        .get(id)
        .copied()
        .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))
}
