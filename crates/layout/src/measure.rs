use crate::{PositionedNode, PositionedNodes, Vec2};
use std::collections::HashMap;

/// Measured label bounding boxes reported by the rendering collaborator
///
/// Label measurement happens outside the layout core (the renderer knows
/// fonts, the core does not); this trait is the feedback channel.
pub trait LabelMetrics {
    /// The rendered size of a node's label, if it has been measured
    fn measure(&self, node: &PositionedNode) -> Option<Vec2>;
}

// Blanket implementation for closures
impl<F> LabelMetrics for F
where
    F: Fn(&PositionedNode) -> Option<Vec2>,
{
    fn measure(&self, node: &PositionedNode) -> Option<Vec2> {
        self(node)
    }
}

// Implementation for HashMap keyed by node id
impl LabelMetrics for HashMap<String, Vec2> {
    fn measure(&self, node: &PositionedNode) -> Option<Vec2> {
        self.get(&node.id).copied()
    }
}

impl PositionedNodes {
    /// Attach display scale factors from measured label boxes
    ///
    /// `scale = min(node_size.x / measured.x, node_size.y / measured.y)`,
    /// the factor that fits the label inside the node box. Anchors and
    /// layers are left untouched; unmeasured and degenerate boxes are
    /// skipped.
    pub fn apply_label_metrics<M>(&mut self, node_size: Vec2, metrics: &M)
    where
        M: LabelMetrics,
    {
        for node in self.nodes_mut() {
            let Some(measured) = metrics.measure(node) else {
                continue;
            };
            if measured.x <= 0.0 || measured.y <= 0.0 {
                continue;
            }
            node.scale = Some((node_size.x / measured.x).min(node_size.y / measured.y));
        }
    }
}
