use crate::{Vertex, Weight};

/// Storage backend for a weighted directed graph over the fixed vertex set
/// `0..vertex_count`.
///
/// Implementations may assume every vertex argument is in range; range
/// checks are the job of [`Graph`](crate::Graph).  At most one edge is
/// stored per ordered pair of vertices.
pub trait AdjacencyStore: Clone {
    /// Creates a store with `vertex_count` vertices and no edges.
    fn with_vertex_count(vertex_count: usize) -> Self;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Gets the weight of the edge from `from` to `into`, if it exists.
    fn get(&self, from: Vertex, into: Vertex) -> Option<Weight>;

    /// Inserts an edge from `from` to `into` unless one is already present.
    /// Returns the weight of the existing edge, in which case the store is
    /// unchanged.
    fn insert_if_absent(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Option<Weight>;

    /// Removes the edge from `from` to `into`, returning its weight if it existed.
    fn remove(&mut self, from: Vertex, into: Vertex) -> Option<Weight>;

    /// Iterates over the edges leaving `from` as `(target, weight)` pairs.
    fn edges_from(&self, from: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_;

    /// Iterates over the edges entering `into` as `(source, weight)` pairs,
    /// in ascending order of source.
    fn edges_into(&self, into: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_;

    /// Iterates over all edges as `(source, target, weight)` triples, grouped
    /// by source in ascending order.
    fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        (0..self.vertex_count())
            .flat_map(move |from| self.edges_from(from).map(move |(into, w)| (from, into, w)))
    }

    /// Returns the total number of edges.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns the number of edges leaving `from`.
    fn num_edges_from(&self, from: Vertex) -> usize {
        self.edges_from(from).count()
    }

    /// Returns the number of edges entering `into`.
    fn num_edges_into(&self, into: Vertex) -> usize {
        self.edges_into(into).count()
    }
}

/// Shared tests for [`AdjacencyStore`] implementations.
#[cfg(test)]
#[macro_export]
macro_rules! adjacency_store_tests {
    ($mod_name:ident, $store:ty) => {
        mod $mod_name {
            use $crate::adjacency_store::AdjacencyStore;

            type Store = $store;

            #[test]
            fn test_new_store_is_empty() {
                let store = Store::with_vertex_count(5);
                assert_eq!(store.vertex_count(), 5);
                assert_eq!(store.num_edges(), 0);
                assert_eq!(store.edges().count(), 0);
            }

            #[test]
            fn test_insert_and_get() {
                let mut store = Store::with_vertex_count(3);
                assert_eq!(store.insert_if_absent(0, 1, 2.5), None);
                assert_eq!(store.get(0, 1), Some(2.5));
                assert_eq!(store.get(1, 0), None);
            }

            #[test]
            fn test_insert_keeps_existing() {
                let mut store = Store::with_vertex_count(3);
                store.insert_if_absent(0, 1, 2.5);
                assert_eq!(store.insert_if_absent(0, 1, 9.0), Some(2.5));
                assert_eq!(store.get(0, 1), Some(2.5));
                assert_eq!(store.num_edges(), 1);
            }

            #[test]
            fn test_zero_weight_is_an_edge() {
                let mut store = Store::with_vertex_count(2);
                store.insert_if_absent(1, 0, 0.0);
                assert_eq!(store.get(1, 0), Some(0.0));
            }

            #[test]
            fn test_remove() {
                let mut store = Store::with_vertex_count(3);
                store.insert_if_absent(2, 0, 1.0);
                assert_eq!(store.remove(2, 0), Some(1.0));
                assert_eq!(store.get(2, 0), None);
                assert_eq!(store.remove(2, 0), None);
            }

            #[test]
            fn test_self_loop() {
                let mut store = Store::with_vertex_count(2);
                store.insert_if_absent(1, 1, 4.0);
                assert_eq!(store.get(1, 1), Some(4.0));
                assert_eq!(store.edges_from(1).collect::<Vec<_>>(), vec![(1, 4.0)]);
                assert_eq!(store.edges_into(1).collect::<Vec<_>>(), vec![(1, 4.0)]);
            }

            #[test]
            fn test_edges_into_ascending() {
                let mut store = Store::with_vertex_count(4);
                store.insert_if_absent(3, 2, 1.0);
                store.insert_if_absent(0, 2, 2.0);
                store.insert_if_absent(1, 2, 3.0);
                store.insert_if_absent(1, 3, 4.0);
                assert_eq!(
                    store.edges_into(2).collect::<Vec<_>>(),
                    vec![(0, 2.0), (1, 3.0), (3, 1.0)]
                );
                assert_eq!(store.num_edges_into(2), 3);
            }

            #[test]
            fn test_counts() {
                let mut store = Store::with_vertex_count(4);
                store.insert_if_absent(0, 1, 1.0);
                store.insert_if_absent(0, 2, 1.0);
                store.insert_if_absent(3, 0, 1.0);
                assert_eq!(store.num_edges(), 3);
                assert_eq!(store.num_edges_from(0), 2);
                assert_eq!(store.num_edges_from(1), 0);
                assert_eq!(store.num_edges_into(0), 1);
            }

            #[test]
            fn test_edges_grouped_by_source() {
                let mut store = Store::with_vertex_count(3);
                store.insert_if_absent(2, 0, 1.0);
                store.insert_if_absent(0, 1, 2.0);
                let sources: Vec<_> = store.edges().map(|(from, _, _)| from).collect();
                assert_eq!(sources, vec![0, 2]);
            }

            #[test]
            fn test_clone_is_independent() {
                let mut store = Store::with_vertex_count(2);
                store.insert_if_absent(0, 1, 1.0);
                let copy = store.clone();
                store.remove(0, 1);
                assert_eq!(copy.get(0, 1), Some(1.0));
            }
        }
    };
}
