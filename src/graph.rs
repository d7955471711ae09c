use std::fmt::Debug;

use crate::{
    INVALID_RANGE, NO_EDGE, Representation, Vertex, VertexSeq, Weight,
    adjacency_list::AdjacencyList,
    adjacency_matrix::AdjacencyMatrix,
    adjacency_store::AdjacencyStore,
    error::GraphError,
    tracing_support::{graph_debug, graph_debug_span, graph_trace},
    util::Either,
};

/// A weighted directed graph over the vertices `0..vertex_count`.
///
/// The vertex count is fixed for the lifetime of the graph.  Edge weights are
/// finite and non-negative, and there is at most one edge per ordered pair of
/// vertices.  Self-loops are allowed.
///
/// Every query answers the same way whichever [`Representation`] is in use;
/// the representation only affects cost, and the order in which
/// [`successors`](Self::successors) are reported:
///
/// - `Matrix` reports successors in ascending order.
/// - `List` reports successors most recently added first.
///
/// Predecessors are reported in ascending order for both.  A `List` graph
/// keeps no reverse index, so [`predecessors`](Self::predecessors) visits
/// every edge of the graph; convert to `Matrix` first if you need many of
/// them.
#[derive(Clone)]
pub enum Graph {
    Matrix(AdjacencyMatrix),
    List(AdjacencyList),
}

/// Evaluates `$body` with `$store` bound to whichever backend `$graph` holds.
macro_rules! dispatch {
    ($graph:expr, $store:ident => $body:expr) => {
        match $graph {
            Graph::Matrix($store) => $body,
            Graph::List($store) => $body,
        }
    };
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count` is zero.
    pub fn new(vertex_count: usize, representation: Representation) -> Self {
        assert!(vertex_count >= 1, "a graph must have at least one vertex");
        match representation {
            Representation::Matrix => Graph::Matrix(AdjacencyMatrix::with_vertex_count(vertex_count)),
            Representation::List => Graph::List(AdjacencyList::with_vertex_count(vertex_count)),
        }
    }

    /// Creates a graph from `(source, target, weight)` triples.  Fails on the
    /// first edge that [`add_edge`](Self::add_edge) would reject.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count` is zero.
    pub fn from_edges<I>(
        vertex_count: usize,
        representation: Representation,
        edges: I,
    ) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
    {
        let mut graph = Graph::new(vertex_count, representation);
        for (from, into, weight) in edges {
            graph.add_edge(from, into, weight)?;
        }
        Ok(graph)
    }

    pub fn representation(&self) -> Representation {
        match self {
            Graph::Matrix(_) => Representation::Matrix,
            Graph::List(_) => Representation::List,
        }
    }

    pub fn vertex_count(&self) -> usize {
        dispatch!(self, store => store.vertex_count())
    }

    pub fn num_edges(&self) -> usize {
        dispatch!(self, store => store.num_edges())
    }

    /// Creates an independent copy of this graph stored in `representation`.
    /// Converting to the current representation yields a deep copy.
    pub fn convert(&self, representation: Representation) -> Graph {
        let _span = graph_debug_span!(
            "convert",
            from = %self.representation(),
            to = %representation,
            vertex_count = self.vertex_count()
        );
        if representation == self.representation() {
            return self.clone();
        }
        let mut converted = Graph::new(self.vertex_count(), representation);
        for (from, into, weight) in self.edges() {
            let previous = dispatch!(&mut converted, store => store.insert_if_absent(from, into, weight));
            debug_assert!(previous.is_none(), "duplicate edge {from} -> {into} in source graph");
        }
        graph_trace!(num_edges = converted.num_edges(), "converted graph");
        converted
    }

    /// Like [`convert`](Self::convert), but reuses `self` when it is already
    /// in the requested representation.
    pub fn into_representation(self, representation: Representation) -> Graph {
        if representation == self.representation() {
            self
        } else {
            self.convert(representation)
        }
    }

    /// Releases the graph and all of its storage.  Dropping the graph has the
    /// same effect; this method exists to make the end of its life explicit.
    pub fn dispose(self) {
        graph_debug!(
            representation = %self.representation(),
            vertex_count = self.vertex_count(),
            num_edges = self.num_edges(),
            "disposing graph"
        );
        drop(self);
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<Vertex, GraphError> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(vertex)
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }

    /// Panics if `vertex` is out of range, unless the `unchecked` feature is
    /// enabled.
    fn assert_valid_vertex(&self, vertex: Vertex) {
        #[cfg(not(feature = "unchecked"))]
        if let Err(err) = self.check_vertex(vertex) {
            panic!("invalid vertex: {err}");
        }
        #[cfg(feature = "unchecked")]
        let _ = vertex;
    }

    /// Adds an edge from `from` to `into`.
    ///
    /// Fails, leaving the graph unchanged, if either vertex is out of range,
    /// if `weight` is negative or not finite, or if the edge already exists.
    /// An existing edge keeps its original weight.
    pub fn add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Result<(), GraphError> {
        let result = self.try_add_edge(from, into, weight);
        match &result {
            Ok(()) => graph_trace!(from, into, weight, "added edge"),
            Err(_err) => graph_debug!(error = %_err, "add_edge rejected"),
        }
        result
    }

    fn try_add_edge(&mut self, from: Vertex, into: Vertex, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(into)?;
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::InvalidWeight(weight));
        }
        match dispatch!(self, store => store.insert_if_absent(from, into, weight)) {
            None => Ok(()),
            Some(existing) => Err(GraphError::EdgeExists {
                from,
                into,
                weight: existing,
            }),
        }
    }

    /// Removes the edge from `from` to `into` and returns its weight.  Fails,
    /// leaving the graph unchanged, if there is no such edge.
    pub fn delete_edge(&mut self, from: Vertex, into: Vertex) -> Result<Weight, GraphError> {
        let result = self.try_delete_edge(from, into);
        match &result {
            Ok(_weight) => graph_trace!(from, into, weight = _weight, "deleted edge"),
            Err(_err) => graph_debug!(error = %_err, "delete_edge rejected"),
        }
        result
    }

    fn try_delete_edge(&mut self, from: Vertex, into: Vertex) -> Result<Weight, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(into)?;
        dispatch!(self, store => store.remove(from, into)).ok_or(GraphError::NoSuchEdge { from, into })
    }

    /// Gets the weight of the edge from `from` to `into`, `Ok(None)` if there
    /// is no such edge, or an error if either vertex is out of range.
    pub fn weight(&self, from: Vertex, into: Vertex) -> Result<Option<Weight>, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(into)?;
        Ok(dispatch!(self, store => store.get(from, into)))
    }

    /// Gets the weight of the edge from `from` to `into`, using sentinels for
    /// the other cases: [`NO_EDGE`] if there is no such edge, and
    /// [`INVALID_RANGE`] if either vertex is out of range.
    pub fn edge_weight(&self, from: Vertex, into: Vertex) -> Weight {
        match self.weight(from, into) {
            Ok(Some(weight)) => weight,
            Ok(None) => NO_EDGE,
            Err(_) => INVALID_RANGE,
        }
    }

    /// Returns true if there is an edge from `from` to `into`.  Out-of-range
    /// vertices have no edges.
    pub fn has_edge(&self, from: Vertex, into: Vertex) -> bool {
        matches!(self.weight(from, into), Ok(Some(_)))
    }

    /// Gets the targets of the edges leaving `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range.
    pub fn successors(&self, from: Vertex) -> VertexSeq {
        self.assert_valid_vertex(from);
        dispatch!(self, store => store.edges_from(from).map(|(into, _)| into).collect())
    }

    /// Gets the sources of the edges entering `into`, in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `into` is out of range.
    pub fn predecessors(&self, into: Vertex) -> VertexSeq {
        self.assert_valid_vertex(into);
        dispatch!(self, store => store.edges_into(into).map(|(from, _)| from).collect())
    }

    /// # Panics
    ///
    /// Panics if `from` is out of range.
    pub fn out_degree(&self, from: Vertex) -> usize {
        self.assert_valid_vertex(from);
        dispatch!(self, store => store.num_edges_from(from))
    }

    /// # Panics
    ///
    /// Panics if `into` is out of range.
    pub fn in_degree(&self, into: Vertex) -> usize {
        self.assert_valid_vertex(into);
        dispatch!(self, store => store.num_edges_into(into))
    }

    /// Iterates over every edge as `(source, target, weight)`, grouped by
    /// source in ascending order.  Within a source, edges come in the same
    /// order as [`successors`](Self::successors).
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        match self {
            Graph::Matrix(matrix) => Either::Left(matrix.edges()),
            Graph::List(list) => Either::Right(list.edges()),
        }
    }
}

/// Graphs are equal when they have the same vertices and the same weighted
/// edges, whatever their representations.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.num_edges() == other.num_edges()
            && self
                .edges()
                .all(|(from, into, weight)| other.weight(from, into) == Ok(Some(weight)))
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("representation", &self.representation())
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn test_new_rejects_empty_graph() {
        Graph::new(0, Representation::Matrix);
    }

    #[test]
    fn test_new_graph_has_no_edges() {
        for rep in Representation::ALL {
            let graph = Graph::new(3, rep);
            assert_eq!(graph.representation(), rep);
            assert_eq!(graph.vertex_count(), 3);
            assert_eq!(graph.num_edges(), 0);
            for from in 0..3 {
                for into in 0..3 {
                    assert_eq!(graph.edge_weight(from, into), NO_EDGE);
                }
            }
        }
    }

    #[test]
    fn test_single_vertex_self_loop() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(1, rep);
            assert_eq!(graph.add_edge(0, 0, 1.0), Ok(()));
            assert_eq!(graph.successors(0).as_slice(), &[0]);
            assert_eq!(graph.predecessors(0).as_slice(), &[0]);
            assert_eq!(graph.out_degree(0), 1);
            assert_eq!(graph.in_degree(0), 1);
        }
    }

    #[test]
    fn test_add_edge_rejects_bad_weights() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(2, rep);
            for weight in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert!(matches!(
                    graph.add_edge(0, 1, weight),
                    Err(GraphError::InvalidWeight(_))
                ));
            }
            assert_eq!(graph.num_edges(), 0);
        }
    }

    #[test]
    fn test_add_edge_out_of_range() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(2, rep);
            assert_eq!(
                graph.add_edge(0, 2, 1.0),
                Err(GraphError::VertexOutOfRange {
                    vertex: 2,
                    vertex_count: 2
                })
            );
            assert_eq!(
                graph.add_edge(usize::MAX, 0, 1.0),
                Err(GraphError::VertexOutOfRange {
                    vertex: usize::MAX,
                    vertex_count: 2
                })
            );
            assert_eq!(graph.num_edges(), 0);
        }
    }

    #[test]
    fn test_add_existing_edge_reports_existing_weight() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(2, rep);
            graph.add_edge(0, 1, 2.5).unwrap();
            assert_eq!(
                graph.add_edge(0, 1, 9.0),
                Err(GraphError::EdgeExists {
                    from: 0,
                    into: 1,
                    weight: 2.5
                })
            );
        }
    }

    #[test]
    fn test_delete_edge() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(3, rep);
            graph.add_edge(1, 2, 0.5).unwrap();
            assert_eq!(graph.delete_edge(1, 2), Ok(0.5));
            assert_eq!(
                graph.delete_edge(1, 2),
                Err(GraphError::NoSuchEdge { from: 1, into: 2 })
            );
            assert!(matches!(
                graph.delete_edge(1, 3),
                Err(GraphError::VertexOutOfRange { vertex: 3, .. })
            ));
            assert!(matches!(
                graph.delete_edge(3, 1),
                Err(GraphError::VertexOutOfRange { vertex: 3, .. })
            ));
        }
    }

    #[test]
    fn test_weight_query() {
        for rep in Representation::ALL {
            let mut graph = Graph::new(2, rep);
            graph.add_edge(1, 0, 3.0).unwrap();
            assert_eq!(graph.weight(1, 0), Ok(Some(3.0)));
            assert_eq!(graph.weight(0, 1), Ok(None));
            assert!(graph.weight(0, 5).is_err());
            assert!(graph.has_edge(1, 0));
            assert!(!graph.has_edge(0, 1));
            assert!(!graph.has_edge(7, 0));
        }
    }

    #[test]
    fn test_successor_order() {
        let edges = [(0, 2, 1.0), (0, 3, 1.0), (0, 1, 1.0)];
        let matrix = Graph::from_edges(4, Representation::Matrix, edges).unwrap();
        let list = Graph::from_edges(4, Representation::List, edges).unwrap();
        assert_eq!(matrix.successors(0).as_slice(), &[1, 2, 3]);
        assert_eq!(list.successors(0).as_slice(), &[1, 3, 2]);
    }

    #[test]
    fn test_predecessor_order() {
        let edges = [(3, 0, 1.0), (1, 0, 1.0), (2, 0, 1.0)];
        for rep in Representation::ALL {
            let graph = Graph::from_edges(4, rep, edges).unwrap();
            assert_eq!(graph.predecessors(0).as_slice(), &[1, 2, 3]);
        }
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    #[should_panic(expected = "invalid vertex")]
    fn test_successors_out_of_range_panics() {
        Graph::new(2, Representation::List).successors(2);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    #[should_panic(expected = "invalid vertex")]
    fn test_predecessors_out_of_range_panics() {
        Graph::new(2, Representation::Matrix).predecessors(5);
    }

    #[test]
    fn test_from_edges_fails_on_duplicate() {
        let result = Graph::from_edges(2, Representation::List, [(0, 1, 1.0), (0, 1, 2.0)]);
        assert!(matches!(result, Err(GraphError::EdgeExists { .. })));
    }

    #[test]
    fn test_convert_list_to_list_keeps_order() {
        let graph =
            Graph::from_edges(4, Representation::List, [(0, 2, 1.0), (0, 3, 1.0), (0, 1, 1.0)])
                .unwrap();
        let copy = graph.convert(Representation::List);
        assert_eq!(copy.successors(0), graph.successors(0));
    }

    #[test]
    fn test_convert_matrix_to_list_order() {
        let graph =
            Graph::from_edges(4, Representation::Matrix, [(0, 2, 1.0), (0, 3, 1.0), (0, 1, 1.0)])
                .unwrap();
        let list = graph.convert(Representation::List);
        assert_eq!(list.representation(), Representation::List);
        assert_eq!(list.successors(0).as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_convert_is_independent() {
        for rep in Representation::ALL {
            for target in Representation::ALL {
                let mut graph = Graph::from_edges(2, rep, [(0, 1, 1.0)]).unwrap();
                let mut copy = graph.convert(target);
                graph.delete_edge(0, 1).unwrap();
                copy.add_edge(1, 0, 2.0).unwrap();
                assert_eq!(copy.edge_weight(0, 1), 1.0);
                assert_eq!(graph.edge_weight(1, 0), NO_EDGE);
            }
        }
    }

    #[test]
    fn test_into_representation() {
        let graph = Graph::from_edges(3, Representation::Matrix, [(2, 1, 4.0)]).unwrap();
        let list = graph.clone().into_representation(Representation::List);
        assert_eq!(list.representation(), Representation::List);
        assert_eq!(list, graph);
    }

    #[test]
    fn test_equality_ignores_representation() {
        let edges = [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)];
        let matrix = Graph::from_edges(3, Representation::Matrix, edges).unwrap();
        let mut list = Graph::from_edges(3, Representation::List, edges).unwrap();
        assert_eq!(matrix, list);
        list.delete_edge(2, 0).unwrap();
        list.add_edge(2, 0, 3.5).unwrap();
        assert_ne!(matrix, list);
        assert_ne!(matrix, Graph::from_edges(4, Representation::Matrix, edges).unwrap());
    }

    #[test]
    fn test_debug() {
        let graph = Graph::from_edges(2, Representation::List, [(0, 1, 1.5)]).unwrap();
        assert_eq!(
            format!("{:?}", graph),
            "Graph { representation: List, vertex_count: 2, edges: [(0, 1, 1.5)] }"
        );
    }

    #[test]
    fn test_dispose() {
        let graph = Graph::from_edges(2, Representation::Matrix, [(0, 1, 1.0)]).unwrap();
        let snapshot = graph.convert(Representation::List);
        graph.dispose();
        assert_eq!(snapshot.edge_weight(0, 1), 1.0);
    }
}
