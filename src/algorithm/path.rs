use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, Graph};
use crate::{unreachable_distance, Error, Result};

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Reconstructs the path from `origin` to `dest` found by the last
    /// single-source run
    ///
    /// The run must have used `origin` as its source. Returns
    /// [`Error::Unreachable`] if the predecessor chain of `dest` never reaches
    /// `origin`; a path from a vertex to itself is just `[origin]`.
    pub fn get_path(&self, origin: &T, dest: &T) -> Result<Vec<T>> {
        let origin = self.require(origin)?;
        let dest = self.require(dest)?;
        let vertices = self.vertices();

        let mut path = vec![vertices[dest].payload.clone()];
        let mut current = dest;

        // Build path in reverse order
        while current != origin {
            // A chain longer than the graph means stale or cyclic links
            if path.len() > vertices.len() {
                warn!("Path reconstruction from {} looped at vertex {}", dest, current);
                return Err(Error::Unreachable);
            }
            match vertices[current].predecessor {
                Some(pred) => {
                    current = pred;
                    path.push(vertices[current].payload.clone());
                }
                None => return Err(Error::Unreachable),
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Reconstructs the path from `origin` to `dest` out of the last
    /// Floyd-Warshall table
    pub fn get_floyd_warshall_path(&self, origin: &T, dest: &T) -> Result<Vec<T>> {
        let from = self.require(origin)?;
        let to = self.require(dest)?;
        let table = self.all_pairs().ok_or(Error::ShortestPathsNotComputed)?;

        match table.distance(from, to) {
            Some(d) if d != unreachable_distance::<W>() => {}
            _ => return Err(Error::Unreachable),
        }

        let mut path = vec![origin.clone()];
        let mut current = from;
        while current != to {
            current = table.next_hop(current, to).ok_or(Error::Unreachable)?;
            path.push(self.payload(current).ok_or(Error::VertexNotFound)?.clone());
            // Only a negative cycle can make the walk outgrow the graph
            if path.len() > self.vertex_count() {
                warn!("Floyd-Warshall path {} -> {} does not terminate", from, to);
                return Err(Error::NegativeCycleDetected);
            }
        }

        Ok(path)
    }
}
