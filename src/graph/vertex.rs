use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::data_structures::HeapSlot;

/// Index of a vertex inside a [`DirectedGraph`](crate::graph::DirectedGraph)'s vertex arena
pub type VertexId = usize;

/// A directed, weighted edge between two vertices of the same graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) origin: VertexId,
    pub(crate) destination: VertexId,
    pub(crate) weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(origin: VertexId, destination: VertexId, weight: W) -> Self {
        Edge { origin, destination, weight }
    }

    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A vertex: the caller's payload, its outgoing edges and the scratch state
/// written by graph algorithms.
///
/// The auxiliary fields (`visited`, `distance`, `predecessor`, `processing`,
/// `queue_index`) belong to whichever algorithm ran last. Every algorithm
/// resets the ones it uses before starting.
#[derive(Debug, Clone)]
pub struct Vertex<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) payload: T,
    pub(crate) adj: Vec<Edge<W>>,
    pub(crate) visited: bool,
    pub(crate) distance: W,
    pub(crate) predecessor: Option<VertexId>,
    pub(crate) processing: bool,
    pub(crate) queue_index: Option<usize>,
}

impl<T, W> Vertex<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(payload: T) -> Self {
        Vertex {
            payload,
            adj: Vec::new(),
            visited: false,
            distance: crate::unreachable_distance(),
            predecessor: None,
            processing: false,
            queue_index: None,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Outgoing edges in insertion order
    pub fn outgoing(&self) -> &[Edge<W>] {
        &self.adj
    }

    /// Distance computed by the last shortest-path run
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Previous vertex on the shortest path found by the last single-source run
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Returns true if the last shortest-path run reached this vertex
    pub fn is_reachable(&self) -> bool {
        self.distance != crate::unreachable_distance()
    }

    /// Clears everything a shortest-path run reads or writes
    pub(crate) fn reset_path_state(&mut self) {
        self.visited = false;
        self.distance = crate::unreachable_distance();
        self.predecessor = None;
        self.queue_index = None;
    }
}

impl<T, W> HeapSlot for Vertex<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    type Key = W;

    fn key(&self) -> W {
        self.distance
    }

    fn queue_index(&self) -> Option<usize> {
        self.queue_index
    }

    fn set_queue_index(&mut self, index: Option<usize>) {
        self.queue_index = index;
    }
}
