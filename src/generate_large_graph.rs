use crate::{Graph, Representation, Vertex, Weight};

/// Number of vertices in a graph made by [`generate_large_graph`].
pub const LARGE_GRAPH_VERTICES: usize = 410;

const CLUSTER1: usize = 0;
const CLUSTER2: usize = 50;
const CLUSTER3: usize = 130;
const HUBS: usize = 280;
const SCATTERED: usize = 300;
const BRIDGES: usize = 400;

/// Generates a large graph with an irregular, deterministic structure.
///
/// The graph structure includes:
/// - Cluster 1: Dense cluster (50 vertices, ~60% connectivity)
/// - Cluster 2: Medium cluster (80 vertices, ~30% connectivity)
/// - Cluster 3: Large sparse cluster (150 vertices, ~8% connectivity)
/// - Hub vertices (20 vertices with many outgoing edges)
/// - Scattered vertices (100 vertices with few connections)
/// - Bridge vertices connecting clusters (10 vertices)
/// - Long-range and reciprocal edges between arbitrary vertices
/// - Self loops
///
/// The resulting graph has [`LARGE_GRAPH_VERTICES`] vertices and several
/// thousand edges.  `new_weight` is called with consecutive indices starting
/// from zero for each edge that is added.
pub fn generate_large_graph_with<FW>(representation: Representation, mut new_weight: FW) -> Graph
where
    FW: FnMut(usize) -> Weight,
{
    let mut graph = Graph::new(LARGE_GRAPH_VERTICES, representation);
    let mut edge_counter = 0;
    // Overlapping patterns produce some pairs twice; those are skipped.
    let mut connect = |graph: &mut Graph, from: Vertex, into: Vertex| {
        if !graph.has_edge(from, into) && graph.add_edge(from, into, new_weight(edge_counter)).is_ok() {
            edge_counter += 1;
        }
    };

    // Cluster 1: both directions for ~60% of pairs
    for i in CLUSTER1..CLUSTER2 {
        for j in (i + 1)..CLUSTER2 {
            if (i * 7 + j * 11) % 10 < 6 {
                connect(&mut graph, i, j);
                connect(&mut graph, j, i);
            }
        }
    }

    // Cluster 2
    for i in CLUSTER2..CLUSTER3 {
        for j in (i + 1)..CLUSTER3 {
            if (i * 13 + j * 17) % 10 < 3 {
                connect(&mut graph, i, j);
            }
        }
    }

    // Cluster 3
    for i in CLUSTER3..HUBS {
        for j in (i + 1)..HUBS {
            if (i * 19 + j * 23) % 100 < 8 {
                connect(&mut graph, i, j);
            }
        }
    }

    // Hubs point at many earlier vertices
    for hub in HUBS..SCATTERED {
        for i in 0..hub {
            if (hub * 29 + i * 31) % 7 < 4 {
                connect(&mut graph, hub, i);
            }
        }
    }

    // Scattered vertices connect to 1-3 earlier vertices
    for vertex in SCATTERED..BRIDGES {
        let num_connections = (vertex % 3) + 1;
        for c in 0..num_connections {
            let into = (SCATTERED * 37 + vertex * 41 + c * 43) % vertex;
            connect(&mut graph, vertex, into);
        }
    }

    // Bridges link one vertex from each cluster
    for (i, bridge) in (BRIDGES..LARGE_GRAPH_VERTICES).enumerate() {
        connect(&mut graph, bridge, (i * 47) % (CLUSTER2 - CLUSTER1) + CLUSTER1);
        connect(&mut graph, bridge, (i * 53) % (CLUSTER3 - CLUSTER2) + CLUSTER2);
        connect(&mut graph, bridge, (i * 59) % (HUBS - CLUSTER3) + CLUSTER3);
    }

    // Long-range connections
    for i in 0..200 {
        let from = (i * 61) % LARGE_GRAPH_VERTICES;
        let into = (i * 67 + 100) % LARGE_GRAPH_VERTICES;
        if from != into {
            connect(&mut graph, from, into);
        }
    }

    // Reciprocal pairs
    for i in 0..50 {
        let a = (i * 73 + 7) % LARGE_GRAPH_VERTICES;
        let b = (i * 79 + 11) % LARGE_GRAPH_VERTICES;
        if a != b {
            connect(&mut graph, a, b);
            connect(&mut graph, b, a);
        }
    }

    // Self loops
    for i in 0..50 {
        let vertex = (i * 71) % LARGE_GRAPH_VERTICES;
        connect(&mut graph, vertex, vertex);
    }

    graph
}

/// Generates a large graph as [`generate_large_graph_with`] does, with edge
/// weights cycling through `0.0, 0.25, ..., 24.75`.
pub fn generate_large_graph(representation: Representation) -> Graph {
    generate_large_graph_with(representation, |i| (i % 100) as Weight / 4.0)
}
