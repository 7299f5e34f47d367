use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};

use crate::algorithm::{prepare_single_source, ShortestPathAlgorithm};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{DirectedGraph, Graph};
use crate::Result;

/// Classic Dijkstra's algorithm over an indexed priority queue with decrease-key
///
/// Edge weights must be non-negative for the distances to be correct. With
/// negative weights the run still terminates, because settled vertices are
/// never queued again, but the results are unspecified.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<T, W> ShortestPathAlgorithm<T, W> for Dijkstra
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &mut DirectedGraph<T, W>, source: &T) -> Result<()> {
        let source = prepare_single_source(graph, source)?;
        if !graph.validate_non_negative() {
            warn!("Dijkstra run on a graph with negative edge weights; distances are unspecified");
        }
        debug!(
            "Dijkstra from vertex {} ({} vertices, {} edges)",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        let vertices = graph.vertices_mut();
        let mut queue = IndexedPriorityQueue::with_capacity(vertices.len());
        queue.insert(vertices, source)?;
        let mut settled = 0usize;

        while let Some(u) = queue.extract_min(vertices) {
            vertices[u].visited = true;
            settled += 1;
            let dist_u = vertices[u].distance;

            // Relax all outgoing edges
            for i in 0..vertices[u].adj.len() {
                let edge = vertices[u].adj[i];
                let v = edge.destination;
                if vertices[v].visited {
                    continue;
                }

                let new_dist = dist_u + edge.weight;
                if new_dist < vertices[v].distance {
                    trace!("relax {} -> {}: {:?}", u, v, new_dist);
                    vertices[v].distance = new_dist;
                    vertices[v].predecessor = Some(u);
                    if queue.contains(vertices, v) {
                        queue.decrease_key(vertices, v)?;
                    } else {
                        queue.insert(vertices, v)?;
                    }
                }
            }
        }

        debug!("Dijkstra settled {} vertices", settled);
        Ok(())
    }
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Runs [`Dijkstra`] from `source`
    pub fn dijkstra_shortest_path(&mut self, source: &T) -> Result<()> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }
}
