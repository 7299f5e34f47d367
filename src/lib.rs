//! Digraph Paths - generic directed graphs with traversal and shortest-path algorithms
//!
//! Vertices carry a caller-supplied payload that identifies them, edges carry a
//! floating point weight. The crate provides depth/breadth-first traversals,
//! topological sorting, acyclicity checks and four shortest-path algorithms
//! (Dijkstra, unweighted BFS, Bellman-Ford and Floyd-Warshall) together with
//! path reconstruction.
//!
//! Every algorithm stores its results in auxiliary fields of the graph's
//! vertices and resets the fields it uses at the start of each run, so results
//! are only meaningful until the next run or structural change.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use num_traits::Float;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::AllPairsTable,
    floyd_warshall::FloydWarshall, unweighted::UnweightedShortestPath, ShortestPathAlgorithm,
};
pub use data_structures::IndexedPriorityQueue;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::vertex::{Edge, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("a vertex with this payload already exists")]
    DuplicateVertex,

    #[error("vertex not found in graph")]
    VertexNotFound,

    #[error("edge not found in graph")]
    EdgeNotFound,

    #[error("negative-weight cycle detected")]
    NegativeCycleDetected,

    #[error("destination is unreachable from origin")]
    Unreachable,

    #[error("all-pairs shortest paths have not been computed")]
    ShortestPathsNotComputed,

    #[error("vertex {0} is already in the priority queue")]
    AlreadyQueued(VertexId),

    #[error("vertex {0} is not in the priority queue")]
    NotQueued(VertexId),

    #[error("index {0} is outside the queued items")]
    IndexOutOfRange(VertexId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Distance sentinel for vertices no path has reached.
///
/// This is the largest finite value of `W` rather than infinity, and no
/// algorithm ever adds an edge weight to it.
pub fn unreachable_distance<W: Float>() -> W {
    W::max_value()
}
