use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::vertex::{Edge, VertexId};
use crate::Result;

/// Trait representing a weighted directed graph whose vertices are keyed by payload
pub trait Graph<T, W>: Debug
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the id of the vertex holding `payload`
    fn find_vertex_id(&self, payload: &T) -> Option<VertexId>;

    /// Returns the payload stored at `vertex`
    fn payload(&self, vertex: VertexId) -> Option<&T>;

    /// Returns an iterator over the outgoing edges from a vertex, as (target, weight)
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex, as (source, weight)
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns every edge, grouped by origin in vertex storage order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns true if a vertex holds `payload`
    fn has_vertex(&self, payload: &T) -> bool {
        self.find_vertex_id(payload).is_some()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &T, to: &T) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first edge from `from` to `to`, if any
    fn get_edge_weight(&self, from: &T, to: &T) -> Option<W> {
        let from = self.find_vertex_id(from)?;
        let to = self.find_vertex_id(to)?;
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
///
/// Failed operations leave the graph untouched.
pub trait MutableGraph<T, W>: Graph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex holding `payload` and returns its ID
    fn add_vertex(&mut self, payload: T) -> Result<VertexId>;

    /// Removes a vertex and all edges entering or leaving it
    fn remove_vertex(&mut self, payload: &T) -> Result<()>;

    /// Adds a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: &T, to: &T, weight: W) -> Result<()>;

    /// Removes the first edge from `from` to `to`
    fn remove_edge(&mut self, from: &T, to: &T) -> Result<()>;

    /// Updates the weight of the first edge from `from` to `to`
    fn update_edge_weight(&mut self, from: &T, to: &T, weight: W) -> Result<()>;
}
