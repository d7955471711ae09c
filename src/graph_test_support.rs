//! Helpers for property-testing [`Graph`]s with `quickcheck`.

use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// A randomly generated graph of up to 12 vertices in either representation.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for Representation {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Representation::Matrix
        } else {
            Representation::List
        }
    }
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = usize::arbitrary(g) % 12 + 1;
        let num_edges = usize::arbitrary(g) % 40;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Graph::new(vertex_count, Representation::arbitrary(g));
        for i in 0..num_edges {
            let from = usize::arbitrary(g) % vertex_count;
            let into = usize::arbitrary(g) % vertex_count;
            // Repeated pairs are rejected by the graph and simply skipped.
            let _ = graph.add_edge(from, into, arbitrary_weight(g));
            if i < num_extra_self_loops {
                let _ = graph.add_edge(from, from, arbitrary_weight(g));
            }
        }

        ArbGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let graph = self.graph.clone();
        let edges: Vec<_> = graph.edges().map(|(from, into, _)| (from, into)).collect();
        Box::new(edges.into_iter().map(move |(from, into)| {
            let mut smaller = graph.clone();
            let _ = smaller.delete_edge(from, into);
            ArbGraph { graph: smaller }
        }))
    }
}

/// A finite, non-negative weight with a fractional part.
pub fn arbitrary_weight(g: &mut Gen) -> Weight {
    Weight::from(u16::arbitrary(g)) / 8.0
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph, panicking on the first
/// violation found.
pub fn check_graph_consistency(graph: &Graph) {
    let vertex_count = graph.vertex_count();
    assert!(vertex_count >= 1);

    let mut total_out = 0;
    let mut total_in = 0;
    for vertex in 0..vertex_count {
        let successors = graph.successors(vertex);
        let predecessors = graph.predecessors(vertex);

        assert_eq!(successors.len(), graph.out_degree(vertex));
        assert_eq!(predecessors.len(), graph.in_degree(vertex));
        assert!(!has_duplicates(successors.iter()));
        assert!(!has_duplicates(predecessors.iter()));
        assert!(predecessors.as_slice().windows(2).all(|w| w[0] < w[1]));

        for &into in &successors {
            let weight = graph.edge_weight(vertex, into);
            assert!(weight.is_finite() && weight >= 0.0, "bad weight {weight}");
        }
        total_out += successors.len();
        total_in += predecessors.len();
    }
    assert_eq!(total_out, graph.num_edges());
    assert_eq!(total_in, graph.num_edges());
    assert_eq!(graph.edges().count(), graph.num_edges());
    assert!(!has_duplicates(graph.edges().map(|(from, into, _)| (from, into))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_duplicates() {
        assert!(has_duplicates([1, 2, 1]));
        assert!(!has_duplicates([1, 2, 3]));
    }

    #[test]
    fn test_arbitrary_graphs_are_consistent() {
        let mut g = Gen::new(20);
        for _ in 0..50 {
            let ArbGraph { graph } = ArbGraph::arbitrary(&mut g);
            check_graph_consistency(&graph);
        }
    }

    #[test]
    fn test_shrink_removes_one_edge() {
        let graph =
            Graph::from_edges(3, Representation::List, [(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
        let shrunk: Vec<_> = ArbGraph { graph }.shrink().collect();
        assert_eq!(shrunk.len(), 2);
        assert!(shrunk.iter().all(|arb| arb.graph.num_edges() == 1));
    }
}
