//! Traversals over a [`DirectedGraph`]: depth-first, breadth-first,
//! topological order and acyclicity.
//!
//! Each traversal resets the `visited` (and, for [`DirectedGraph::is_dag`],
//! `processing`) flag of every vertex before it starts. Depth-first walks keep
//! an explicit stack of `(vertex, next edge)` frames, which yields exactly the
//! pre-order of the recursive formulation without growing the call stack.

use std::collections::VecDeque;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, Vertex, VertexId};
use crate::Result;

fn reset_visited<T, W>(vertices: &mut [Vertex<T, W>])
where
    W: Float + Zero + Debug + Copy,
{
    for vertex in vertices {
        vertex.visited = false;
        vertex.processing = false;
    }
}

/// Visits everything reachable from `start` that is not yet visited, appending
/// ids in pre-order
fn dfs_visit<T, W>(vertices: &mut [Vertex<T, W>], start: VertexId, order: &mut Vec<VertexId>)
where
    W: Float + Zero + Debug + Copy,
{
    vertices[start].visited = true;
    order.push(start);
    let mut stack = vec![(start, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = *frame;
        match vertices[v].adj.get(cursor).map(|edge| edge.destination) {
            Some(next) => {
                frame.1 += 1;
                if !vertices[next].visited {
                    vertices[next].visited = true;
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Depth-first walk from `start` marking the recursion stack with
/// `processing`; returns false on the first back edge
fn dfs_is_dag<T, W>(vertices: &mut [Vertex<T, W>], start: VertexId) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    vertices[start].visited = true;
    vertices[start].processing = true;
    let mut stack = vec![(start, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = *frame;
        match vertices[v].adj.get(cursor).map(|edge| edge.destination) {
            Some(next) => {
                frame.1 += 1;
                if vertices[next].processing {
                    return false;
                }
                if !vertices[next].visited {
                    vertices[next].visited = true;
                    vertices[next].processing = true;
                    stack.push((next, 0));
                }
            }
            None => {
                vertices[v].processing = false;
                stack.pop();
            }
        }
    }
    true
}

impl<T, W> DirectedGraph<T, W>
where
    T: PartialEq + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn payloads(&self, ids: &[VertexId]) -> Vec<T> {
        let vertices = self.vertices();
        ids.iter().map(|&id| vertices[id].payload.clone()).collect()
    }

    /// Depth-first search over the whole graph
    ///
    /// Unvisited vertices are taken as roots in storage order, so every vertex
    /// appears exactly once regardless of connectivity.
    pub fn dfs(&mut self) -> Vec<T> {
        let vertices = self.vertices_mut();
        reset_visited(vertices);

        let mut order = Vec::with_capacity(vertices.len());
        for root in 0..vertices.len() {
            if !vertices[root].visited {
                dfs_visit(vertices, root, &mut order);
            }
        }
        self.payloads(&order)
    }

    /// Depth-first search restricted to the vertices reachable from `source`
    pub fn dfs_from(&mut self, source: &T) -> Result<Vec<T>> {
        let source = self.require(source)?;
        let vertices = self.vertices_mut();
        reset_visited(vertices);

        let mut order = Vec::new();
        dfs_visit(vertices, source, &mut order);
        Ok(self.payloads(&order))
    }

    /// Breadth-first search from `source`; unreachable vertices are left out
    pub fn bfs(&mut self, source: &T) -> Result<Vec<T>> {
        let source = self.require(source)?;
        let vertices = self.vertices_mut();
        reset_visited(vertices);

        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        vertices[source].visited = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for i in 0..vertices[v].adj.len() {
                let next = vertices[v].adj[i].destination;
                if !vertices[next].visited {
                    vertices[next].visited = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(self.payloads(&order))
    }

    /// Topological order of the vertices (Kahn's algorithm)
    ///
    /// Returns an empty vector if the graph has a cycle. Vertices that become
    /// ready at the same time come out in storage order.
    pub fn topsort(&self) -> Vec<T> {
        let vertices = self.vertices();
        let mut indegree = vec![0usize; vertices.len()];
        for edge in vertices.iter().flat_map(|v| v.adj.iter()) {
            indegree[edge.destination] += 1;
        }

        let mut queue: VecDeque<VertexId> =
            (0..vertices.len()).filter(|&v| indegree[v] == 0).collect();
        let mut order = Vec::with_capacity(vertices.len());

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for edge in &vertices[v].adj {
                indegree[edge.destination] -= 1;
                if indegree[edge.destination] == 0 {
                    queue.push_back(edge.destination);
                }
            }
        }

        if order.len() < vertices.len() {
            debug!(
                "topsort: only {} of {} vertices ordered, graph has a cycle",
                order.len(),
                vertices.len()
            );
            return Vec::new();
        }
        self.payloads(&order)
    }

    /// Returns true if the graph has no directed cycle
    pub fn is_dag(&mut self) -> bool {
        let vertices = self.vertices_mut();
        reset_visited(vertices);

        for root in 0..vertices.len() {
            if !vertices[root].visited && !dfs_is_dag(vertices, root) {
                return false;
            }
        }
        true
    }

    /// Breadth-first walk from `source` that finds the vertex discovering the
    /// most new children
    ///
    /// A vertex's new children are its successors not yet visited when it is
    /// dequeued. Ties go to the vertex dequeued first. Returns the winning
    /// payload with its count; a source that discovers nothing yields
    /// `(source, 0)`.
    pub fn max_new_children(&mut self, source: &T) -> Result<(T, usize)> {
        let source = self.require(source)?;
        let vertices = self.vertices_mut();
        reset_visited(vertices);

        let mut best = (source, 0usize);
        let mut queue = VecDeque::new();
        vertices[source].visited = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let mut new_children = 0;
            for i in 0..vertices[v].adj.len() {
                let next = vertices[v].adj[i].destination;
                if !vertices[next].visited {
                    vertices[next].visited = true;
                    new_children += 1;
                    queue.push_back(next);
                }
            }
            if new_children > best.1 {
                best = (v, new_children);
            }
        }

        Ok((vertices[best.0].payload.clone(), best.1))
    }
}
