use digraph_paths::algorithm::ShortestPathAlgorithm;
use digraph_paths::graph::generators::{grid_graph, random_weighted_graph};
use digraph_paths::graph::{DirectedGraph, Graph, MutableGraph};
use digraph_paths::{unreachable_distance, BellmanFord, Dijkstra, Error, UnweightedShortestPath};
use ordered_float::OrderedFloat;

// A -> B (1), B -> C (2), A -> C (5), C -> D (1)
fn diamond() -> DirectedGraph<&'static str, f64> {
    let mut graph = DirectedGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge(&"A", &"B", 1.0).unwrap();
    graph.add_edge(&"B", &"C", 2.0).unwrap();
    graph.add_edge(&"A", &"C", 5.0).unwrap();
    graph.add_edge(&"C", &"D", 1.0).unwrap();
    graph
}

fn distances<T, W>(graph: &DirectedGraph<T, W>) -> Vec<W>
where
    T: PartialEq + Clone + std::fmt::Debug,
    W: num_traits::Float + std::fmt::Debug,
{
    graph.vertices().iter().map(|v| v.distance()).collect()
}

fn assert_close(a: f64, b: f64, context: &str) {
    if a == b {
        return;
    }
    assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{}: {} != {}", context, a, b);
}

/// Sum of the weights along consecutive vertices of `path`, folded from the left
fn path_weight(graph: &DirectedGraph<usize, f64>, path: &[usize]) -> f64 {
    path.windows(2).fold(0.0, |acc, pair| {
        let weight = graph
            .find_vertex(&pair[0])
            .unwrap()
            .outgoing()
            .iter()
            .filter(|e| graph.payload(e.destination()) == Some(&pair[1]))
            .map(|e| e.weight())
            .fold(f64::MAX, f64::min);
        acc + weight
    })
}

#[test]
fn test_dijkstra_on_diamond() {
    let mut graph = diamond();
    graph.dijkstra_shortest_path(&"A").unwrap();

    assert_eq!(distances(&graph), vec![0.0, 1.0, 3.0, 4.0]);
    assert_eq!(graph.get_path(&"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(graph.get_path(&"A", &"A").unwrap(), vec!["A"]);
    assert_eq!(graph.predecessor(&"C"), Ok(Some(&"B")));
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let mut graph = diamond();
    graph.add_edge(&"D", &"A", -10.0).unwrap();

    assert_eq!(graph.bellman_ford_shortest_path(&"A"), Err(Error::NegativeCycleDetected));
    // Partial relaxations stay in place after detection
    assert_ne!(graph.distance(&"B"), Ok(unreachable_distance::<f64>()));
    assert!(graph.distance(&"A").unwrap() < 0.0);
    assert!(graph.predecessor(&"B").unwrap().is_some());

    assert_eq!(
        BellmanFord::new().with_early_exit(true).compute_shortest_paths(&mut graph, &"A"),
        Err(Error::NegativeCycleDetected)
    );
    assert!(graph.vertices().iter().all(|v| v.is_reachable()));
    assert_eq!(graph.predecessor(&"B"), Ok(Some(&"A")));
}

#[test]
fn test_bellman_ford_negative_edges_without_cycle() {
    let mut graph = diamond();
    graph.add_vertex("E").unwrap();
    graph.add_edge(&"A", &"E", 2.0).unwrap();
    graph.add_edge(&"E", &"C", -3.0).unwrap();

    graph.bellman_ford_shortest_path(&"A").unwrap();
    assert_eq!(distances(&graph), vec![0.0, 1.0, -1.0, 0.0, 2.0]);
    assert_eq!(graph.get_path(&"A", &"D").unwrap(), vec!["A", "E", "C", "D"]);

    let mut graph = diamond();
    graph.add_edge(&"A", &"D", -1.0).unwrap();
    graph.add_edge(&"D", &"B", -1.0).unwrap();
    graph.bellman_ford_shortest_path(&"A").unwrap();
    assert_eq!(distances(&graph), vec![0.0, -2.0, 0.0, -1.0]);
    assert_eq!(graph.get_path(&"A", &"C").unwrap(), vec!["A", "D", "B", "C"]);
}

#[test]
fn test_unreachable_negative_cycle_is_ignored() {
    let mut graph = diamond();
    graph.add_vertex("Y").unwrap();
    graph.add_vertex("Z").unwrap();
    graph.add_edge(&"Y", &"Z", -3.0).unwrap();
    graph.add_edge(&"Z", &"Y", 1.0).unwrap();

    graph.bellman_ford_shortest_path(&"A").unwrap();
    assert_eq!(graph.distance(&"D"), Ok(4.0));
    assert_eq!(graph.distance(&"Y"), Ok(unreachable_distance::<f64>()));
    assert_eq!(graph.bellman_ford_shortest_path(&"Y"), Err(Error::NegativeCycleDetected));
}

#[test]
fn test_dijkstra_terminates_with_negative_edges() {
    let mut graph = diamond();
    graph.add_edge(&"D", &"A", -10.0).unwrap();
    graph.add_edge(&"B", &"D", -2.0).unwrap();

    assert_eq!(graph.dijkstra_shortest_path(&"A"), Ok(()));
    assert!(graph.vertices().iter().all(|v| v.is_visited()));
    // The source is settled first and never revisited
    assert_eq!(graph.distance(&"A"), Ok(0.0));
    assert_eq!(graph.get_path(&"A", &"D").unwrap(), vec!["A", "B", "D"]);
}

#[test]
fn test_unweighted_counts_hops() {
    let mut graph = diamond();
    graph.unweighted_shortest_path(&"A").unwrap();

    assert_eq!(distances(&graph), vec![0.0, 1.0, 1.0, 2.0]);
    assert_eq!(graph.get_path(&"A", &"D").unwrap(), vec!["A", "C", "D"]);
}

#[test]
fn test_unreachable_path_is_an_error() {
    let mut graph = diamond();
    graph.add_vertex("Z").unwrap();

    let algorithms: [&dyn ShortestPathAlgorithm<&str, f64>; 3] =
        [&Dijkstra, &UnweightedShortestPath, &BellmanFord::new()];
    for algorithm in algorithms {
        algorithm.compute_shortest_paths(&mut graph, &"B").unwrap();
        assert!(!graph.find_vertex(&"Z").unwrap().is_reachable(), "{}", algorithm.name());
        assert_eq!(graph.get_path(&"B", &"Z"), Err(Error::Unreachable));
        assert_eq!(graph.get_path(&"B", &"A"), Err(Error::Unreachable));
        assert_eq!(graph.get_path(&"B", &"D").unwrap(), vec!["B", "C", "D"]);
    }
    assert_eq!(graph.get_path(&"B", &"Q"), Err(Error::VertexNotFound));
    assert_eq!(graph.dijkstra_shortest_path(&"Q"), Err(Error::VertexNotFound));
}

#[test]
fn test_floyd_warshall_on_diamond() {
    let mut graph = diamond();
    assert_eq!(
        graph.get_floyd_warshall_path(&"A", &"D"),
        Err(Error::ShortestPathsNotComputed)
    );

    graph.floyd_warshall_shortest_path();
    assert_eq!(graph.floyd_warshall_distance(&"A", &"D"), Ok(4.0));
    assert_eq!(graph.floyd_warshall_distance(&"B", &"D"), Ok(3.0));
    assert_eq!(graph.floyd_warshall_distance(&"C", &"C"), Ok(0.0));
    assert_eq!(graph.floyd_warshall_distance(&"D", &"A"), Ok(f64::MAX));

    assert_eq!(graph.get_floyd_warshall_path(&"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(graph.get_floyd_warshall_path(&"B", &"B").unwrap(), vec!["B"]);
    assert_eq!(graph.get_floyd_warshall_path(&"D", &"A"), Err(Error::Unreachable));
    assert!(!graph.all_pairs().unwrap().has_negative_cycle());
}

#[test]
fn test_floyd_warshall_uses_lightest_parallel_edge() {
    let mut graph = diamond();
    graph.add_edge(&"A", &"D", 9.0).unwrap();
    graph.add_edge(&"A", &"D", 2.5).unwrap();

    graph.floyd_warshall_shortest_path();
    assert_eq!(graph.floyd_warshall_distance(&"A", &"D"), Ok(2.5));
    assert_eq!(graph.get_floyd_warshall_path(&"A", &"D").unwrap(), vec!["A", "D"]);
}

#[test]
fn test_floyd_warshall_flags_negative_cycle_on_diagonal() {
    let mut graph = diamond();
    graph.add_edge(&"D", &"A", -10.0).unwrap();
    graph.floyd_warshall_shortest_path();

    let table = graph.all_pairs().unwrap();
    assert!(table.has_negative_cycle());
    assert!(table.distance(0, 0).unwrap() < 0.0);
}

#[test]
fn test_floyd_warshall_path_through_negative_cycle() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge(&"A", &"B", -3.0).unwrap();
    graph.add_edge(&"B", &"A", -1.0).unwrap();
    graph.add_edge(&"B", &"C", 1.0).unwrap();
    graph.floyd_warshall_shortest_path();

    assert!(graph.all_pairs().unwrap().has_negative_cycle());
    // The first hops towards C bounce between A and B
    assert_eq!(
        graph.get_floyd_warshall_path(&"A", &"C"),
        Err(Error::NegativeCycleDetected)
    );
    assert_eq!(
        graph.get_floyd_warshall_path(&"B", &"C"),
        Err(Error::NegativeCycleDetected)
    );
    assert_eq!(graph.get_floyd_warshall_path(&"A", &"B").unwrap(), vec!["A", "B"]);
    assert_eq!(graph.get_floyd_warshall_path(&"C", &"A"), Err(Error::Unreachable));
}

#[test]
fn test_ordered_float_weights() {
    let mut graph: DirectedGraph<char, OrderedFloat<f64>> = DirectedGraph::new();
    for v in ['a', 'b', 'c'] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge(&'a', &'b', OrderedFloat(2.0)).unwrap();
    graph.add_edge(&'b', &'c', OrderedFloat(2.0)).unwrap();
    graph.add_edge(&'a', &'c', OrderedFloat(5.0)).unwrap();

    graph.dijkstra_shortest_path(&'a').unwrap();
    assert_eq!(graph.distance(&'c'), Ok(OrderedFloat(4.0)));
    assert_eq!(graph.get_path(&'a', &'c').unwrap(), vec!['a', 'b', 'c']);

    graph.floyd_warshall_shortest_path();
    assert_eq!(graph.floyd_warshall_distance(&'a', &'c'), Ok(OrderedFloat(4.0)));
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let mut graph = grid_graph(10, 10).unwrap();
    let (source, target) = ((0, 0), (9, 9));

    graph.dijkstra_shortest_path(&source).unwrap();
    assert_eq!(graph.distance(&target), Ok(18.0));

    let path = graph.get_path(&source, &target).unwrap();
    assert_eq!(path.len(), 19);
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }

    graph.unweighted_shortest_path(&source).unwrap();
    assert_eq!(graph.distance(&target), Ok(18.0));
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = grid_graph(10, 10).unwrap();

    // Create a wall of obstacles in the middle
    for y in 0..8 {
        graph.remove_vertex(&(5, y)).unwrap();
    }
    assert_eq!(graph.vertex_count(), 92);

    let (source, target) = ((0, 0), (9, 9));
    graph.dijkstra_shortest_path(&source).unwrap();
    assert_eq!(graph.distance(&target), Ok(18.0));

    let path = graph.get_path(&source, &target).unwrap();
    assert!(path.iter().all(|&(x, y)| x != 5 || y >= 8), "Path should go around the wall");
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }

    // Sealing the last gaps splits the grid in two
    graph.remove_vertex(&(5, 8)).unwrap();
    graph.remove_vertex(&(5, 9)).unwrap();
    graph.dijkstra_shortest_path(&source).unwrap();
    assert_eq!(graph.get_path(&source, &target), Err(Error::Unreachable));
}

#[test]
fn test_single_source_algorithms_agree_on_random_graphs() {
    for seed in 0..25 {
        let mut graph = random_weighted_graph(40, 3.0, 1.0, 20.0, seed).unwrap();
        let source = (seed as usize) % 40;

        graph.dijkstra_shortest_path(&source).unwrap();
        let dijkstra = distances(&graph);
        graph.bellman_ford_shortest_path(&source).unwrap();
        let bellman_ford = distances(&graph);
        BellmanFord::new()
            .with_early_exit(true)
            .compute_shortest_paths(&mut graph, &source)
            .unwrap();
        let early_exit = distances(&graph);

        for v in 0..40 {
            let context = format!("seed {} vertex {}", seed, v);
            assert_close(dijkstra[v], bellman_ford[v], &context);
            assert_eq!(bellman_ford[v], early_exit[v], "{}", context);
        }
    }
}

#[test]
fn test_floyd_warshall_matches_dijkstra_on_random_graphs() {
    for seed in 0..10 {
        let mut graph = random_weighted_graph(30, 2.5, 0.5, 10.0, seed).unwrap();
        graph.floyd_warshall_shortest_path();

        for source in 0..30 {
            graph.dijkstra_shortest_path(&source).unwrap();
            for target in 0..30 {
                let expected = graph.distance(&target).unwrap();
                let actual = graph.floyd_warshall_distance(&source, &target).unwrap();
                let context = format!("seed {} {} -> {}", seed, source, target);
                assert_close(actual, expected, &context);

                if expected != unreachable_distance::<f64>() {
                    let path = graph.get_floyd_warshall_path(&source, &target).unwrap();
                    assert_close(path_weight(&graph, &path), expected, &context);
                } else {
                    assert_eq!(
                        graph.get_floyd_warshall_path(&source, &target),
                        Err(Error::Unreachable)
                    );
                }
            }
        }
    }
}

#[test]
fn test_paths_sum_to_distances() {
    let algorithms: [&dyn ShortestPathAlgorithm<usize, f64>; 2] = [&Dijkstra, &BellmanFord::new()];
    for seed in 0..10 {
        let mut graph = random_weighted_graph(50, 3.0, 1.0, 50.0, 100 + seed).unwrap();

        for algorithm in algorithms {
            algorithm.compute_shortest_paths(&mut graph, &0).unwrap();
            for target in 0..50 {
                let context = format!("{} seed {} target {}", algorithm.name(), seed, target);
                let distance = graph.distance(&target).unwrap();
                match graph.get_path(&0, &target) {
                    Ok(path) => {
                        assert_eq!(path[0], 0);
                        assert_close(path_weight(&graph, &path), distance, &context);
                    }
                    Err(e) => {
                        assert_eq!(e, Error::Unreachable, "{}", context);
                        assert_eq!(distance, unreachable_distance::<f64>(), "{}", context);
                    }
                }
            }
        }

        // Hop counts: a path of n vertices is n - 1 edges long
        graph.unweighted_shortest_path(&0).unwrap();
        for target in 0..50 {
            let distance = graph.distance(&target).unwrap();
            match graph.get_path(&0, &target) {
                Ok(path) => assert_eq!((path.len() - 1) as f64, distance, "seed {}", seed),
                Err(e) => {
                    assert_eq!(e, Error::Unreachable);
                    assert_eq!(distance, unreachable_distance::<f64>());
                }
            }
        }
    }
}
