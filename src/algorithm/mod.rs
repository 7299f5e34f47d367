pub mod traits;
pub mod traversal;
pub mod dijkstra;
pub mod unweighted;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod path;

pub use traits::ShortestPathAlgorithm;

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, VertexId};
use crate::Result;

/// Resets distance, predecessor, visited and queue state on every vertex and
/// puts `source` at distance zero
pub(crate) fn prepare_single_source<T, W>(
    graph: &mut DirectedGraph<T, W>,
    source: &T,
) -> Result<VertexId>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    let source = graph.require(source)?;
    let vertices = graph.vertices_mut();
    for vertex in vertices.iter_mut() {
        vertex.reset_path_state();
    }
    vertices[source].distance = W::zero();
    Ok(source)
}
