use std::fmt::Debug;

use crate::{NO_EDGE, Vertex, Weight, adjacency_store::AdjacencyStore};

/// Dense adjacency matrix backed by a single flat buffer of `n * n` weights.
///
/// Absent edges hold [`NO_EDGE`].  Cell `(row, col)` lives at
/// `row * n + col`.
#[derive(Clone, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Gets the linear storage index for the cell at `row` and `col`.
    fn index(&self, row: Vertex, col: Vertex) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    fn row(&self, row: Vertex) -> &[Weight] {
        let start = self.index(row, 0);
        &self.weights[start..start + self.size]
    }
}

fn present(weight: Weight) -> Option<Weight> {
    (weight != NO_EDGE).then_some(weight)
}

impl AdjacencyStore for AdjacencyMatrix {
    fn with_vertex_count(vertex_count: usize) -> Self {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .unwrap_or_else(|| panic!("adjacency matrix for {vertex_count} vertices is too large"));
        AdjacencyMatrix {
            size: vertex_count,
            weights: vec![NO_EDGE; cells],
        }
    }

    fn vertex_count(&self) -> usize {
        self.size
    }

    fn get(&self, from: Vertex, into: Vertex) -> Option<Weight> {
        present(self.weights[self.index(from, into)])
    }

    fn insert_if_absent(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Option<Weight> {
        let index = self.index(from, into);
        let existing = present(self.weights[index]);
        if existing.is_none() {
            self.weights[index] = weight;
        }
        existing
    }

    fn remove(&mut self, from: Vertex, into: Vertex) -> Option<Weight> {
        let index = self.index(from, into);
        present(std::mem::replace(&mut self.weights[index], NO_EDGE))
    }

    fn edges_from(&self, from: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter_map(|(into, &weight)| present(weight).map(|w| (into, w)))
    }

    fn edges_into(&self, into: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        assert!(into < self.size, "column {into} out of range for {} vertices", self.size);
        (0..self.size).filter_map(move |from| self.get(from, into).map(|w| (from, w)))
    }

    fn num_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w != NO_EDGE).count()
    }
}

impl Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("size", &self.size)
            .field("entries", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
