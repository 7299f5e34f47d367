use std::collections::VecDeque;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::{prepare_single_source, ShortestPathAlgorithm};
use crate::graph::DirectedGraph;
use crate::Result;

/// Breadth-first shortest paths that ignore edge weights
///
/// Distances are hop counts, as if every edge weighed one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnweightedShortestPath;

impl UnweightedShortestPath {
    pub fn new() -> Self {
        UnweightedShortestPath
    }
}

impl<T, W> ShortestPathAlgorithm<T, W> for UnweightedShortestPath
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Unweighted BFS"
    }

    fn compute_shortest_paths(&self, graph: &mut DirectedGraph<T, W>, source: &T) -> Result<()> {
        let source = prepare_single_source(graph, source)?;
        let vertices = graph.vertices_mut();
        vertices[source].visited = true;

        let mut queue = VecDeque::new();
        queue.push_back(source);
        let mut reached = 0usize;

        while let Some(u) = queue.pop_front() {
            reached += 1;
            let hops = vertices[u].distance + W::one();
            for i in 0..vertices[u].adj.len() {
                let v = vertices[u].adj[i].destination;
                if !vertices[v].visited {
                    vertices[v].visited = true;
                    vertices[v].distance = hops;
                    vertices[v].predecessor = Some(u);
                    queue.push_back(v);
                }
            }
        }

        debug!("Unweighted BFS from vertex {} reached {} vertices", source, reached);
        Ok(())
    }
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Runs [`UnweightedShortestPath`] from `source`
    pub fn unweighted_shortest_path(&mut self, source: &T) -> Result<()> {
        UnweightedShortestPath::new().compute_shortest_paths(self, source)
    }
}
