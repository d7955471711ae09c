use crate::{Vertex, Weight};

/// Reasons a graph operation was rejected.  Whenever one of these is
/// returned, the graph is unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id was not in `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },
    /// An edge between the two vertices is already present.
    #[error("an edge from {from} to {into} already exists with weight {weight}")]
    EdgeExists {
        from: Vertex,
        into: Vertex,
        weight: Weight,
    },
    /// There is no edge between the two vertices.
    #[error("no edge from {from} to {into}")]
    NoSuchEdge { from: Vertex, into: Vertex },
    /// Edge weights must be finite and non-negative.
    #[error("invalid edge weight {0}; weights must be finite and non-negative")]
    InvalidWeight(Weight),
}

/// Error returned when parsing a [`Representation`](crate::Representation) from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown graph representation {0:?}; expected \"matrix\" or \"list\"")]
pub struct ParseRepresentationError(pub String);

/// Two-valued outcome of a mutation, for callers that only care whether it
/// took effect.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    /// Collapses a result to its status without consuming it.
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(_) => Status::Error,
        }
    }
}

impl<T, E> From<Result<T, E>> for Status {
    fn from(result: Result<T, E>) -> Self {
        Status::of(&result)
    }
}
