use crate::{Point, Vec2};
use std::collections::HashMap;
use std::hash::Hash;

/// Where edges attach to a positioned node
///
/// Inbound edges terminate at `incoming` on the left edge of the node box;
/// outbound edges originate at `outgoing`, offset by the rendered node
/// width. Both share the same y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAnchors {
    pub layer: usize,
    pub incoming: Point,
    pub outgoing: Point,
}

/// Spread layered nodes across the canvas with even margins on every side
///
/// Layer `i` of `L` sits at x = `canvas.x / (L+1) * (i+1)`; row `j` of `k`
/// within a layer sits at y = `canvas.y / (k+1) * (j+1)`.
pub(crate) fn assign_anchors<N>(
    layers: &[Vec<N>],
    canvas: Vec2,
    node_width: f32,
) -> HashMap<N, NodeAnchors>
where
    N: Copy + Eq + Hash,
{
    let mut anchors = HashMap::new();
    let layer_step = canvas.x / (layers.len() + 1) as f32;

    for (layer, nodes) in layers.iter().enumerate() {
        let x = layer_step * (layer + 1) as f32;
        let row_step = canvas.y / (nodes.len() + 1) as f32;
        for (row, &node) in nodes.iter().enumerate() {
            let y = row_step * (row + 1) as f32;
            anchors.insert(
                node,
                NodeAnchors {
                    layer,
                    incoming: Point::new(x, y),
                    outgoing: Point::new(x + node_width, y),
                },
            );
        }
    }

    anchors
}
