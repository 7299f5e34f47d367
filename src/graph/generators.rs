use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph over payloads `0..n`
///
/// Roughly `edge_factor * n` edges are drawn with weights uniform in
/// `min_weight..max_weight`. Self-loops are skipped; parallel edges may occur.
/// The same seed always yields the same graph.
pub fn random_weighted_graph(
    n: usize,
    edge_factor: f64,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> Result<DirectedGraph<usize, f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v)?;
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = if max_weight > min_weight {
                rng.gen_range(min_weight..max_weight)
            } else {
                min_weight
            };
            graph.add_edge(&u, &v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a random DAG over payloads `0..n`
///
/// Every edge points from a lower to a higher payload, each pair being
/// connected with probability `edge_probability`. Weights are uniform in `1..10`.
pub fn random_dag(n: usize, edge_probability: f64, seed: u64) -> Result<DirectedGraph<usize, f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    // Insert in shuffled order so storage order is not already topological
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    for v in order {
        graph.add_vertex(v)?;
    }

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(edge_probability.clamp(0.0, 1.0)) {
                graph.add_edge(&u, &v, rng.gen_range(1.0..10.0))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with edges in both directions between
/// 4-neighbours
///
/// Payloads are `(x, y)` pairs and every edge has weight 1.
pub fn grid_graph(width: usize, height: usize) -> Result<DirectedGraph<(usize, usize), f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y))?;
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(&(x, y), &(x + 1, y), 1.0)?;
                graph.add_edge(&(x + 1, y), &(x, y), 1.0)?;
            }
            if y + 1 < height {
                graph.add_edge(&(x, y), &(x, y + 1), 1.0)?;
                graph.add_edge(&(x, y + 1), &(x, y), 1.0)?;
            }
        }
    }

    Ok(graph)
}
