use std::collections::VecDeque;

use crate::{Vertex, Weight, adjacency_store::AdjacencyStore};

#[derive(Clone, Debug, PartialEq)]
struct ListEntry {
    target: Vertex,
    weight: Weight,
}

/// Adjacency lists: for each vertex, the sequence of its outgoing edges.
///
/// New edges go to the front of their source's sequence, so iteration
/// yields the most recently added edge first.  No reverse index is kept;
/// finding the edges into a vertex scans every sequence.
#[derive(Clone, Debug)]
pub struct AdjacencyList {
    lists: Vec<VecDeque<ListEntry>>,
}

impl AdjacencyList {
    fn position(&self, from: Vertex, into: Vertex) -> Option<usize> {
        self.lists[from].iter().position(|entry| entry.target == into)
    }
}

impl AdjacencyStore for AdjacencyList {
    fn with_vertex_count(vertex_count: usize) -> Self {
        AdjacencyList {
            lists: vec![VecDeque::new(); vertex_count],
        }
    }

    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn get(&self, from: Vertex, into: Vertex) -> Option<Weight> {
        self.lists[from]
            .iter()
            .find(|entry| entry.target == into)
            .map(|entry| entry.weight)
    }

    fn insert_if_absent(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Option<Weight> {
        if let Some(existing) = self.get(from, into) {
            return Some(existing);
        }
        self.lists[from].push_front(ListEntry {
            target: into,
            weight,
        });
        None
    }

    fn remove(&mut self, from: Vertex, into: Vertex) -> Option<Weight> {
        let index = self.position(from, into)?;
        self.lists[from].remove(index).map(|entry| entry.weight)
    }

    fn edges_from(&self, from: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.lists[from]
            .iter()
            .map(|entry| (entry.target, entry.weight))
    }

    fn edges_into(&self, into: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.lists.iter().enumerate().filter_map(move |(from, list)| {
            list.iter()
                .find(|entry| entry.target == into)
                .map(|entry| (from, entry.weight))
        })
    }

    fn num_edges(&self) -> usize {
        self.lists.iter().map(VecDeque::len).sum()
    }

    fn num_edges_from(&self, from: Vertex) -> usize {
        self.lists[from].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::adjacency_store_tests!(store, crate::adjacency_list::AdjacencyList);

    #[test]
    fn test_new_lists_are_empty() {
        let list = AdjacencyList::with_vertex_count(3);
        assert_eq!(list.lists.len(), 3);
        assert!(list.lists.iter().all(VecDeque::is_empty));
    }

    #[test]
    fn test_most_recent_first() {
        let mut list = AdjacencyList::with_vertex_count(4);
        list.insert_if_absent(0, 2, 1.0);
        list.insert_if_absent(0, 3, 1.0);
        list.insert_if_absent(0, 1, 1.0);
        let targets: Vec<_> = list.edges_from(0).map(|(into, _)| into).collect();
        assert_eq!(targets, vec![1, 3, 2]);
    }

    #[test]
    fn test_remove_from_middle_keeps_order() {
        let mut list = AdjacencyList::with_vertex_count(4);
        list.insert_if_absent(0, 1, 1.0);
        list.insert_if_absent(0, 2, 2.0);
        list.insert_if_absent(0, 3, 3.0);
        assert_eq!(list.remove(0, 2), Some(2.0));
        let targets: Vec<_> = list.edges_from(0).map(|(into, _)| into).collect();
        assert_eq!(targets, vec![3, 1]);
    }

    #[test]
    fn test_rejected_insert_keeps_order() {
        let mut list = AdjacencyList::with_vertex_count(3);
        list.insert_if_absent(0, 1, 1.0);
        list.insert_if_absent(0, 2, 2.0);
        list.insert_if_absent(0, 1, 5.0);
        let edges: Vec<_> = list.edges_from(0).collect();
        assert_eq!(edges, vec![(2, 2.0), (1, 1.0)]);
    }

    #[test]
    fn test_reinsert_after_remove_moves_to_front() {
        let mut list = AdjacencyList::with_vertex_count(3);
        list.insert_if_absent(0, 1, 1.0);
        list.insert_if_absent(0, 2, 2.0);
        list.remove(0, 1);
        list.insert_if_absent(0, 1, 3.0);
        let edges: Vec<_> = list.edges_from(0).collect();
        assert_eq!(edges, vec![(1, 3.0), (2, 2.0)]);
    }
}
