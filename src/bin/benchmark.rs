use std::env;
use std::time::{Duration, Instant};

use digraph_paths::algorithm::ShortestPathAlgorithm;
use digraph_paths::graph::generators::random_weighted_graph;
use digraph_paths::graph::{DirectedGraph, Graph};
use digraph_paths::{BellmanFord, Dijkstra, UnweightedShortestPath};
use log::info;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &mut DirectedGraph<usize, f64>,
    source: usize,
) -> Duration
where
    A: ShortestPathAlgorithm<usize, f64>,
{
    info!("Running {} on graph with {} vertices", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let outcome = algorithm.compute_shortest_paths(graph, &source);
    let duration = start.elapsed();

    match outcome {
        Ok(()) => {
            // Count reachable vertices
            let reachable = graph.vertices().iter().filter(|v| v.is_reachable()).count();
            println!(
                "  - {}: {} reachable vertices in {:?}",
                algorithm.name(),
                reachable,
                duration
            );
        }
        Err(e) => println!("  - {}: {} after {:?}", algorithm.name(), e, duration),
    }

    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [max_vertices] [seed]
    let args: Vec<String> = env::args().collect();
    let max_vertices: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(2_000);
    let seed: u64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(42);

    let edge_factor = 4.0;
    let graph_sizes: Vec<usize> = [100, 250, 500, 1_000, 2_000, 5_000]
        .into_iter()
        .filter(|&n| n <= max_vertices)
        .collect();

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs unweighted BFS vs Floyd-Warshall");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let mut graph = random_weighted_graph(size, edge_factor, 1.0, 100.0, seed)?;
        let source = 0;

        let dijkstra_time = benchmark_algorithm(&Dijkstra::new(), &mut graph, source);
        let bellman_ford_time =
            benchmark_algorithm(&BellmanFord::new().with_early_exit(true), &mut graph, source);
        let bfs_time = benchmark_algorithm(&UnweightedShortestPath::new(), &mut graph, source);

        // All-pairs is cubic, keep it to the smaller graphs
        let floyd_time = if size <= 1_000 {
            let start = Instant::now();
            graph.floyd_warshall_shortest_path();
            let elapsed = start.elapsed();
            println!("  - Floyd-Warshall: all pairs in {:?}", elapsed);
            Some(elapsed)
        } else {
            None
        };

        results.push((size, dijkstra_time, bellman_ford_time, bfs_time, floyd_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
        "Vertices", "Dijkstra (ms)", "Bellman (ms)", "BFS (ms)", "Floyd (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra, bellman_ford, bfs, floyd) in &results {
        let floyd = floyd
            .map(|d| format!("{:.2}", d.as_secs_f64() * 1000.0))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2} | {:<15}",
            size,
            dijkstra.as_secs_f64() * 1000.0,
            bellman_ford.as_secs_f64() * 1000.0,
            bfs.as_secs_f64() * 1000.0,
            floyd
        );
    }

    Ok(())
}
