use crate::algorithm::floyd_warshall::AllPairsTable;
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Edge, Vertex, VertexId};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph stored as an arena of vertices with adjacency lists
///
/// Vertices are kept in insertion order and addressed by their position in
/// the arena. Edges, predecessor links and priority queue membership refer to
/// vertices through these indices, so removing a vertex renumbers the ones
/// after it.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertex arena in insertion order
    vertices: Vec<Vertex<T, W>>,

    /// Result of the last Floyd-Warshall run, dropped on any structural change
    all_pairs: Option<AllPairsTable<W>>,
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            all_pairs: None,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            all_pairs: None,
        }
    }

    /// Finds the vertex holding `payload` with a linear scan
    pub fn find_vertex(&self, payload: &T) -> Option<&Vertex<T, W>> {
        self.vertices.iter().find(|v| v.payload == *payload)
    }

    /// Returns the vertex stored at `id`
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(id)
    }

    /// All vertices in storage order
    pub fn vertices(&self) -> &[Vertex<T, W>] {
        &self.vertices
    }

    /// Distance of `payload` computed by the last single-source run
    pub fn distance(&self, payload: &T) -> Result<W> {
        self.find_vertex(payload)
            .map(|v| v.distance)
            .ok_or(Error::VertexNotFound)
    }

    /// Payload of the predecessor of `payload` on the last computed shortest path tree
    pub fn predecessor(&self, payload: &T) -> Result<Option<&T>> {
        let vertex = self.find_vertex(payload).ok_or(Error::VertexNotFound)?;
        Ok(vertex
            .predecessor
            .and_then(|p| self.vertices.get(p))
            .map(|p| &p.payload))
    }

    /// Table produced by the last Floyd-Warshall run, if still valid
    pub fn all_pairs(&self) -> Option<&AllPairsTable<W>> {
        self.all_pairs.as_ref()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.vertices
            .iter()
            .flat_map(|v| v.adj.iter())
            .all(|edge| edge.weight >= W::zero())
    }

    pub(crate) fn require(&self, payload: &T) -> Result<VertexId> {
        self.find_vertex_id(payload).ok_or(Error::VertexNotFound)
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex<T, W>] {
        &mut self.vertices
    }

    pub(crate) fn set_all_pairs(&mut self, table: AllPairsTable<W>) {
        self.all_pairs = Some(table);
    }

    /// Drops results that index into the vertex arena
    fn invalidate(&mut self) {
        self.all_pairs = None;
    }
}

impl<T, W> Default for DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> for DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adj.len()).sum()
    }

    fn find_vertex_id(&self, payload: &T) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.payload == *payload)
    }

    fn payload(&self, vertex: VertexId) -> Option<&T> {
        self.vertices.get(vertex).map(|v| &v.payload)
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(v) = self.vertices.get(vertex) {
            Box::new(v.adj.iter().map(|edge| (edge.destination, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        Box::new(
            self.edges()
                .filter(move |edge| edge.destination == vertex)
                .map(|edge| (edge.origin, edge.weight)),
        )
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.vertices.iter().flat_map(|v| v.adj.iter().copied()))
    }
}

impl<T, W> MutableGraph<T, W> for DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, payload: T) -> Result<VertexId> {
        if self.has_vertex(&payload) {
            return Err(Error::DuplicateVertex);
        }
        self.vertices.push(Vertex::new(payload));
        self.invalidate();
        Ok(self.vertices.len() - 1)
    }

    fn remove_vertex(&mut self, payload: &T) -> Result<()> {
        let removed = self.require(payload)?;

        // Drop every edge entering the vertex; its own adjacency goes with it
        for vertex in &mut self.vertices {
            vertex.adj.retain(|edge| edge.destination != removed);
        }
        self.vertices.remove(removed);

        let shift = |id: VertexId| if id > removed { id - 1 } else { id };
        for vertex in &mut self.vertices {
            for edge in &mut vertex.adj {
                edge.origin = shift(edge.origin);
                edge.destination = shift(edge.destination);
            }
            vertex.predecessor = match vertex.predecessor {
                Some(p) if p == removed => None,
                other => other.map(shift),
            };
            vertex.queue_index = None;
        }

        self.invalidate();
        Ok(())
    }

    fn add_edge(&mut self, from: &T, to: &T, weight: W) -> Result<()> {
        let origin = self.require(from)?;
        let destination = self.require(to)?;
        self.vertices[origin]
            .adj
            .push(Edge::new(origin, destination, weight));
        self.invalidate();
        Ok(())
    }

    fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let origin = self.require(from)?;
        let destination = self.require(to)?;
        let adj = &mut self.vertices[origin].adj;
        let position = adj
            .iter()
            .position(|edge| edge.destination == destination)
            .ok_or(Error::EdgeNotFound)?;
        adj.remove(position);
        self.invalidate();
        Ok(())
    }

    fn update_edge_weight(&mut self, from: &T, to: &T, weight: W) -> Result<()> {
        let origin = self.require(from)?;
        let destination = self.require(to)?;
        let edge = self.vertices[origin]
            .adj
            .iter_mut()
            .find(|edge| edge.destination == destination)
            .ok_or(Error::EdgeNotFound)?;
        edge.weight = weight;
        self.invalidate();
        Ok(())
    }
}
