use colored::Colorize;
use digraph_paths::graph::{DirectedGraph, Graph, MutableGraph};
use digraph_paths::{Error, Result};

fn main() -> Result<()> {
    env_logger::init();

    // Create a simple directed graph
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    for city in ["A", "B", "C", "D"] {
        graph.add_vertex(city)?;
    }

    // Add edges with weights
    graph.add_edge(&"A", &"B", 1.0)?;
    graph.add_edge(&"B", &"C", 2.0)?;
    graph.add_edge(&"A", &"C", 5.0)?;
    graph.add_edge(&"C", &"D", 1.0)?;

    println!("{}", "--- Testing on a simple graph ---".bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
    println!("DFS order: {:?}", graph.dfs());
    println!("BFS from A: {:?}", graph.bfs(&"A")?);
    println!("Topological order: {:?}", graph.topsort());

    graph.dijkstra_shortest_path(&"A")?;
    println!("\n{}", "Dijkstra from A:".green());
    for v in graph.vertices() {
        let target = v.payload();
        match graph.get_path(&"A", target) {
            Ok(path) => println!("  {}: distance = {:.1}, path = {:?}", target, v.distance(), path),
            Err(_) => println!("  {}: {}", target, "unreachable".red()),
        }
    }

    graph.floyd_warshall_shortest_path();
    println!("\n{}", "Floyd-Warshall D -> A:".green());
    match graph.get_floyd_warshall_path(&"D", &"A") {
        Err(Error::Unreachable) => println!("  {}", "no path".red()),
        other => println!("  {:?}", other),
    }

    // Close a negative cycle and let Bellman-Ford notice it
    graph.add_edge(&"D", &"A", -10.0)?;
    match graph.bellman_ford_shortest_path(&"A") {
        Err(Error::NegativeCycleDetected) => {
            println!("\n{}", "Bellman-Ford: negative cycle detected".yellow())
        }
        other => println!("\nBellman-Ford: {:?}", other),
    }

    Ok(())
}
