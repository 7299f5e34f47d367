use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::algorithm::{prepare_single_source, ShortestPathAlgorithm};
use crate::graph::{DirectedGraph, Edge, Graph, Vertex};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths, tolerating negative edge weights
///
/// Runs `|V| - 1` relaxation passes over every edge of the graph and then one
/// detection pass. If any edge can still be relaxed, a negative cycle is
/// reachable from the source and the run fails with
/// [`Error::NegativeCycleDetected`]. The distances and predecessors written up
/// to that point are left in place and must not be trusted.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord {
    /// Stop as soon as a whole pass relaxes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance that always runs all passes
    pub fn new() -> Self {
        BellmanFord { early_exit: false }
    }

    /// Enable or disable stopping once a pass makes no progress
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

/// Relaxes `edge` if its origin has been reached and it shortens the path to
/// its destination
fn relax<T, W>(vertices: &mut [Vertex<T, W>], edge: &Edge<W>) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    let origin = &vertices[edge.origin];
    if !origin.is_reachable() {
        return false;
    }
    let candidate = origin.distance + edge.weight;
    if candidate < vertices[edge.destination].distance {
        vertices[edge.destination].distance = candidate;
        vertices[edge.destination].predecessor = Some(edge.origin);
        true
    } else {
        false
    }
}

impl<T, W> ShortestPathAlgorithm<T, W> for BellmanFord
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &mut DirectedGraph<T, W>, source: &T) -> Result<()> {
        let source = prepare_single_source(graph, source)?;
        let edges: Vec<Edge<W>> = graph.edges().collect();
        let passes = graph.vertex_count().saturating_sub(1);
        debug!(
            "Bellman-Ford from vertex {}: up to {} passes over {} edges",
            source,
            passes,
            edges.len()
        );

        let vertices = graph.vertices_mut();
        for pass in 0..passes {
            let mut changed = false;
            for edge in &edges {
                changed |= relax(vertices, edge);
            }
            if self.early_exit && !changed {
                debug!("Bellman-Ford converged after {} passes", pass + 1);
                break;
            }
        }

        let still_relaxes = edges.iter().any(|edge| {
            let origin = &vertices[edge.origin];
            origin.is_reachable()
                && origin.distance + edge.weight < vertices[edge.destination].distance
        });
        if still_relaxes {
            warn!("Bellman-Ford from vertex {}: negative-weight cycle reachable", source);
            return Err(Error::NegativeCycleDetected);
        }

        Ok(())
    }
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Runs [`BellmanFord`] from `source`
    pub fn bellman_ford_shortest_path(&mut self, source: &T) -> Result<()> {
        BellmanFord::new().compute_shortest_paths(self, source)
    }
}
