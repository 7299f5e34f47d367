use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::DirectedGraph;
use crate::Result;

/// Trait for single-source shortest path algorithms
///
/// Implementations write their results into the graph's vertices: after a
/// successful run every vertex holds its distance from `source` (or the
/// unreachable sentinel) and its predecessor on one shortest path.
pub trait ShortestPathAlgorithm<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &mut DirectedGraph<T, W>, source: &T) -> Result<()>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
