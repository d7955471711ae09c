//! Weighted directed graphs over a fixed set of vertices, stored either as a
//! dense adjacency matrix or as adjacency lists behind one interface.
//!
//! ```
//! use dualgraph::{Graph, NO_EDGE, Representation};
//!
//! let mut graph = Graph::new(4, Representation::Matrix);
//! graph.add_edge(0, 1, 2.5).unwrap();
//! assert!(graph.add_edge(0, 1, 9.0).is_err());
//!
//! let mut list = graph.convert(Representation::List);
//! assert_eq!(list.edge_weight(0, 1), 2.5);
//! list.delete_edge(0, 1).unwrap();
//! assert_eq!(list.edge_weight(0, 1), NO_EDGE);
//! assert_eq!(graph.successors(0).as_slice(), &[1]);
//! ```

#![cfg_attr(not(feature = "tracing"), deny(unused_variables))]

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod adjacency_store;
pub mod error;
pub mod generate_large_graph;
pub mod graph;
pub mod graph_test_support;
pub mod prelude;
pub mod representation;
pub mod tracing_support;
pub mod vertex_seq;

mod util;


pub use crate::error::{GraphError, ParseRepresentationError, Status};
pub use crate::graph::Graph;
pub use crate::representation::Representation;
pub use crate::vertex_seq::VertexSeq;

/// A vertex id, in `0..vertex_count`.
pub type Vertex = usize;

/// An edge weight.
pub type Weight = f64;

/// Weight reported for a pair of vertices with no edge between them.  Never
/// the weight of a real edge.
pub const NO_EDGE: Weight = f64::INFINITY;

/// Weight reported when a vertex in a weight query is out of range.
pub const INVALID_RANGE: Weight = -1.0;

/// Marker appended by [`VertexSeq::to_terminated`].  No graph can have this
/// many vertices, so it is never a valid vertex id.
pub const END_OF_SEQUENCE: Vertex = usize::MAX;
