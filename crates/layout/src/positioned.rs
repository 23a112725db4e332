use crate::layered::LayeredLayoutError;
use crate::{DagLayout, GraphIndex, InputEdge, LayoutError, Point, PositionedEdge};
use std::collections::HashMap;

/// A node with its layer and anchor points resolved
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub display_name: String,
    pub layer: usize,

    /// Left-edge attachment point for inbound edges
    pub incoming: Point,

    /// Right-edge attachment point for outbound edges
    pub outgoing: Point,

    /// Display scale from measured label boxes, attached after layout
    pub scale: Option<f32>,
}

/// The ordered result of positioning, with an id lookup
///
/// Nodes are ordered by layer, then by row within the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNodes {
    nodes: Vec<PositionedNode>,
    by_id: HashMap<String, usize>,
}

impl PositionedNodes {
    /// All nodes, layer by layer
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [PositionedNode] {
        &mut self.nodes
    }

    /// Look up a positioned node by id
    pub fn get(&self, id: &str) -> Option<&PositionedNode> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    /// Join raw edges against the positioned nodes
    ///
    /// One [`PositionedEdge`] per input edge, input order preserved.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] instead of silently dropping an
    /// edge whose endpoint has no position.
    pub fn positioned_edges(
        &self,
        edges: &[InputEdge],
    ) -> Result<Vec<PositionedEdge>, LayoutError> {
        edges
            .iter()
            .map(|edge| {
                let source = self.require(&edge.source_id)?;
                let target = self.require(&edge.target_id)?;
                Ok(PositionedEdge {
                    source: source.clone(),
                    target: target.clone(),
                })
            })
            .collect()
    }

    fn require(&self, id: &str) -> Result<&PositionedNode, LayoutError> {
        self.get(id)
            .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))
    }
}

impl DagLayout {
    /// Run layering and anchor assignment over an indexed graph
    ///
    /// # Errors
    /// Returns [`LayoutError::CyclicGraph`] if some nodes never reach
    /// in-degree zero.
    pub fn position(&self, index: &GraphIndex) -> Result<PositionedNodes, LayoutError> {
        let layers = self.compute_layers(index.graph()).map_err(|error| match error {
            LayeredLayoutError::GraphHasCycle(nodes) => LayoutError::CyclicGraph(
                nodes.into_iter().map(|i| index.id_of(i).to_string()).collect(),
            ),
        })?;
        let anchors = self.compute_anchors(&layers);

        let mut nodes = Vec::with_capacity(index.node_count());
        let mut by_id = HashMap::with_capacity(index.node_count());
        for layer in &layers.nodes {
            for &node_index in layer {
                let input = index.node_by_id(index.id_of(node_index))?;
                let anchor = anchors[&node_index];
                by_id.insert(input.id.clone(), nodes.len());
                nodes.push(PositionedNode {
                    id: input.id.clone(),
                    display_name: input.display_name.clone(),
                    layer: anchor.layer,
                    incoming: anchor.incoming,
                    outgoing: anchor.outgoing,
                    scale: None,
                });
            }
        }

        Ok(PositionedNodes { nodes, by_id })
    }
}
