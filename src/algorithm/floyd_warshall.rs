use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, Graph, VertexId};
use crate::{unreachable_distance, Error, Result};

/// All-pairs distances and first hops produced by [`FloydWarshall`]
///
/// Indexed by [`VertexId`] as they were when the table was built; the graph
/// drops its table on any structural change.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    dist: Vec<Vec<W>>,
    next: Vec<Vec<Option<VertexId>>>,
}

impl<W> AllPairsTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices the table covers
    pub fn size(&self) -> usize {
        self.dist.len()
    }

    /// Shortest distance from `from` to `to`, the unreachable sentinel if there is no path
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.dist.get(from)?.get(to).copied()
    }

    /// Vertex following `from` on the best known path to `to`
    pub fn next_hop(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        self.next.get(from)?.get(to).copied().flatten()
    }

    /// Returns true if some vertex can reach itself with negative total weight
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.dist.len()).any(|i| self.dist[i][i] < W::zero())
    }
}

/// Floyd-Warshall all-pairs shortest paths
///
/// Negative edge weights are allowed. With a negative cycle the table is not
/// meaningful; this shows up as a negative entry on its diagonal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Computes the table without touching the graph
    pub fn compute<T, W>(&self, graph: &DirectedGraph<T, W>) -> AllPairsTable<W>
    where
        T: PartialEq + Clone + Debug,
        W: Float + Zero + Debug + Copy,
    {
        let n = graph.vertex_count();
        let inf = unreachable_distance::<W>();
        debug!("Floyd-Warshall over {} vertices, {} edges", n, graph.edge_count());

        let mut dist = vec![vec![inf; n]; n];
        let mut next = vec![vec![None; n]; n];
        for i in 0..n {
            dist[i][i] = W::zero();
            next[i][i] = Some(i);
        }
        // Parallel edges keep the lightest weight
        for edge in graph.edges() {
            let (i, j) = (edge.origin(), edge.destination());
            if edge.weight() < dist[i][j] {
                dist[i][j] = edge.weight();
                next[i][j] = Some(j);
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == inf {
                    continue;
                }
                for j in 0..n {
                    if dist[k][j] == inf {
                        continue;
                    }
                    let through_k = dist[i][k] + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        let table = AllPairsTable { dist, next };
        if table.has_negative_cycle() {
            warn!("Floyd-Warshall: negative-weight cycle present, distances are undefined");
        }
        table
    }
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Runs [`FloydWarshall`] and keeps the table for later path queries
    pub fn floyd_warshall_shortest_path(&mut self) {
        let table = FloydWarshall::new().compute(self);
        self.set_all_pairs(table);
    }

    /// Distance between two payloads from the stored Floyd-Warshall table
    pub fn floyd_warshall_distance(&self, origin: &T, dest: &T) -> Result<W> {
        let from = self.require(origin)?;
        let to = self.require(dest)?;
        self.all_pairs()
            .and_then(|table| table.distance(from, to))
            .ok_or(Error::ShortestPathsNotComputed)
    }
}
