pub use crate::adjacency_store::AdjacencyStore;
pub use crate::{
    END_OF_SEQUENCE, Graph, GraphError, INVALID_RANGE, NO_EDGE, Representation, Status, Vertex,
    VertexSeq, Weight,
};
