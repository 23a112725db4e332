use super::LayeredLayoutError;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Remaining in-degree per node plus the set already placed in a layer
///
/// Owning the round state in one object keeps the algorithm free of in-place
/// sentinel markings in a shared degree map.
struct DegreeState<N> {
    /// Nodes in first-discovery order; fixes the row order inside each layer
    order: Vec<N>,
    remaining: HashMap<N, usize>,
    assigned: HashSet<N>,
}

impl<N> DegreeState<N>
where
    N: Copy + Eq + Hash,
{
    fn new<G>(graph: G) -> Self
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected<NodeId = N>,
    {
        let order: Vec<N> = graph.node_identifiers().collect();

        // Seeded at zero for every node so sources are discovered too
        let mut remaining: HashMap<N, usize> = order.iter().map(|&n| (n, 0)).collect();
        for &node in &order {
            for succ in graph.neighbors_directed(node, Direction::Outgoing) {
                *remaining.entry(succ).or_insert(0) += 1;
            }
        }

        Self {
            order,
            remaining,
            assigned: HashSet::new(),
        }
    }

    /// Unassigned nodes whose in-degree is currently zero, in discovery order
    fn frontier(&self) -> Vec<N> {
        self.order
            .iter()
            .copied()
            .filter(|n| !self.assigned.contains(n) && self.remaining[n] == 0)
            .collect()
    }

    /// Mark a node as placed and release its outgoing edges
    ///
    /// Parallel edges decrement their target once per edge.
    fn assign<G>(&mut self, graph: G, node: N)
    where
        G: IntoNeighborsDirected<NodeId = N>,
    {
        self.assigned.insert(node);
        for succ in graph.neighbors_directed(node, Direction::Outgoing) {
            if let Some(degree) = self.remaining.get_mut(&succ) {
                *degree = degree.saturating_sub(1);
            }
        }
    }

    /// Nodes never placed in any layer
    fn unassigned(&self) -> Vec<N> {
        self.order
            .iter()
            .copied()
            .filter(|n| !self.assigned.contains(n))
            .collect()
    }
}

/// Assign layers by repeatedly removing zero-in-degree nodes
///
/// Each round collects the whole frontier of unassigned nodes whose
/// in-degree is zero, then releases their outgoing edges. A node's layer is
/// the round in which its in-degree first reached zero; that round-based
/// placement is the contract, it is not interchangeable with longest-path
/// layering.
pub(crate) fn assign_layers<G>(
    graph: G,
) -> Result<Vec<Vec<G::NodeId>>, LayeredLayoutError<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    let mut state = DegreeState::new(graph);
    let mut layers = Vec::new();

    for _ in 0..state.order.len() {
        let frontier = state.frontier();
        if frontier.is_empty() {
            break;
        }
        for &node in &frontier {
            state.assign(graph, node);
        }
        layers.push(frontier);
    }

    let unassigned = state.unassigned();
    if !unassigned.is_empty() {
        return Err(LayeredLayoutError::GraphHasCycle(unassigned));
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::DiGraph;

    /// Resolve layer contents back to node weights for readable assertions
    fn named_layers(
        graph: &DiGraph<&'static str, ()>,
        layers: &[Vec<petgraph::graph::NodeIndex>],
    ) -> Vec<Vec<&'static str>> {
        layers
            .iter()
            .map(|layer| layer.iter().map(|&i| graph[i]).collect())
            .collect()
    }

    #[test]
    fn chain_gets_one_layer_per_node() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b, ());
        graph.add_edge(b, c, ());

        let layers = assign_layers(&graph).unwrap();

        assert_eq!(named_layers(&graph, &layers), [["a"], ["b"], ["c"]]);
    }

    #[test]
    fn rows_follow_node_insertion_order() {
        let mut graph = DiGraph::new();
        let root = graph.add_node("root");
        let z = graph.add_node("z");
        let a = graph.add_node("a");
        graph.add_edge(root, z, ());
        graph.add_edge(root, a, ());

        let layers = assign_layers(&graph).unwrap();

        // "z" was discovered before "a" during the in-degree scan, so it
        // keeps the first row even though "a" sorts first
        assert_eq!(named_layers(&graph, &layers), [vec!["root"], vec!["z", "a"]]);
    }

    #[test]
    fn every_edge_points_to_a_later_layer() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        let d = graph.add_node("d");
        graph.add_edge(a, b, ());
        graph.add_edge(a, c, ());
        graph.add_edge(b, d, ());
        graph.add_edge(c, d, ());

        let layers = assign_layers(&graph).unwrap();

        let layer_of = |node| {
            layers
                .iter()
                .position(|layer| layer.contains(&node))
                .unwrap()
        };
        for edge in graph.raw_edges() {
            assert!(layer_of(edge.source()) < layer_of(edge.target()));
        }
    }

    #[test]
    fn layers_partition_the_node_set() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        let d = graph.add_node("d");
        graph.add_edge(a, c, ());
        graph.add_edge(b, c, ());
        graph.add_edge(c, d, ());

        let layers = assign_layers(&graph).unwrap();

        let mut seen: Vec<_> = layers.iter().flatten().copied().collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn parallel_edges_release_one_in_degree_each() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, ());
        graph.add_edge(a, b, ());

        let layers = assign_layers(&graph).unwrap();

        assert_eq!(named_layers(&graph, &layers), [["a"], ["b"]]);
    }

    #[test]
    fn layering_is_deterministic() {
        let mut graph = DiGraph::new();
        let nodes: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|&n| graph.add_node(n))
            .collect();
        graph.add_edge(nodes[0], nodes[2], ());
        graph.add_edge(nodes[1], nodes[2], ());
        graph.add_edge(nodes[2], nodes[3], ());
        graph.add_edge(nodes[2], nodes[4], ());

        let first = assign_layers(&graph).unwrap();
        let second = assign_layers(&graph).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn two_cycle_reports_both_nodes() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());

        let LayeredLayoutError::GraphHasCycle(stuck) = assign_layers(&graph).unwrap_err();

        assert_eq!(stuck, [a, b]);
    }

    #[test]
    fn nodes_behind_a_cycle_are_reported_too() {
        let mut graph = DiGraph::new();
        let source = graph.add_node("source");
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let behind = graph.add_node("behind");
        graph.add_edge(source, a, ());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());
        graph.add_edge(b, behind, ());

        let LayeredLayoutError::GraphHasCycle(stuck) = assign_layers(&graph).unwrap_err();

        assert_eq!(stuck, [a, b, behind]);
    }

    #[test]
    fn empty_graph_yields_no_layers() {
        let graph = DiGraph::<&str, ()>::new();

        assert!(assign_layers(&graph).unwrap().is_empty());
    }
}
