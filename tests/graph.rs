use nanorand::{Rng, WyRand};
use weighted_paths::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A -1-> B -2-> C and A -5-> C
fn triangle() -> (Graph, [NodeID; 3]) {
    let mut graph: Graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_directed_edge(a, b, 1.0, None).unwrap();
    graph.add_directed_edge(b, c, 2.0, None).unwrap();
    graph.add_directed_edge(a, c, 5.0, None).unwrap();
    (graph, [a, b, c])
}

/// Sum of the Edge costs along consecutive pairs of `nodes`
fn walk_cost<M>(graph: &Graph<M>, nodes: &[NodeID]) -> Cost {
    nodes
        .windows(2)
        .map(|pair| graph.edge(pair[0], pair[1]).unwrap().cost())
        .sum()
}

fn random_graph(rng: &mut WyRand, node_count: usize, edge_count: usize) -> Graph {
    let mut graph: Graph = Graph::new();
    let ids: Vec<NodeID> = (0..node_count)
        .map(|i| graph.add_node(format!("n{}", i)))
        .collect();
    for _ in 0..edge_count {
        let src = ids[rng.generate_range(0..node_count)];
        let target = ids[rng.generate_range(0..node_count)];
        let cost = rng.generate_range(0_u32..20) as Cost;
        graph.add_directed_edge(src, target, cost, None).unwrap();
    }
    graph
}

/// Distances from `start` to every Node, by repeatedly relaxing all Edges
fn bellman_ford(graph: &Graph, start: NodeID) -> Vec<Cost> {
    let mut distance = vec![Cost::INFINITY; graph.len()];
    distance[start] = 0.0;
    for _ in 0..graph.len() {
        let mut changed = false;
        for (id, node) in graph.iter() {
            for edge in node.edges() {
                let candidate = distance[id] + edge.cost();
                if candidate < distance[edge.target()] {
                    distance[edge.target()] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distance
}

#[test]
fn cheaper_detour() {
    init();
    let (mut graph, [a, b, c]) = triangle();

    let outcome = graph.search(a, c).unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.nodes, vec![a, b, c]);
    assert_eq!(path.cost, 3.0);
    assert_eq!(graph[c].distance(), 3.0);
    assert_eq!(walk_cost(&graph, path), 3.0);

    graph.reset_search_state();
    assert_eq!(graph.shortest_path(a, c), Ok(vec![a, b, c]));
}

#[test]
fn no_edges() {
    init();
    let mut graph: Graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");

    assert_eq!(graph.search(a, b), Ok(SearchOutcome::Unreachable));
    graph.reset_search_state();
    assert_eq!(graph.shortest_path(a, b), Ok(vec![]));
}

#[test]
fn same_node() {
    init();
    let (mut graph, [a, _, _]) = triangle();

    assert_eq!(graph.shortest_path(a, a), Ok(vec![]));
    assert_eq!(graph.search(a, a), Ok(SearchOutcome::Trivial));
    // nothing was touched, so a real search can follow right away
    assert!(!graph[a].is_reached());
    assert!(graph.search(a, a).unwrap().path().is_none());
}

#[test]
fn undirected_edge_both_ways() {
    init();
    let mut graph: Graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    graph.add_undirected_edge(a, b, 4.0).unwrap();

    let forward = graph.search(a, b).unwrap().into_path().unwrap();
    assert_eq!(forward.nodes, vec![a, b]);
    assert_eq!(forward.cost, 4.0);

    graph.reset_search_state();
    let backward = graph.search(b, a).unwrap().into_path().unwrap();
    assert_eq!(backward.nodes, vec![b, a]);
    assert_eq!(backward.cost, 4.0);
}

#[test]
fn replaced_edge_is_searched_again() {
    init();
    let mut graph: Graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_directed_edge(a, b, 1.0, None).unwrap();
    graph.add_directed_edge(b, c, 1.0, None).unwrap();
    graph.add_directed_edge(a, c, 5.0, None).unwrap();

    assert_eq!(graph.shortest_path(a, c), Ok(vec![a, b, c]));

    graph.add_directed_edge(a, b, 10.0, None).unwrap();
    assert_eq!(graph[a].edges().len(), 2);

    graph.reset_search_state();
    let path = graph.search(a, c).unwrap().into_path().unwrap();
    assert_eq!(path.nodes, vec![a, c]);
    assert_eq!(path.cost, 5.0);
    assert_eq!(graph.find_path(a, c).unwrap().into_path(), Some(path));
}

#[test]
fn equal_costs_prefer_first_reached() {
    init();
    // A -> B -> D and A -> C -> D, all costs 1
    for b_first in [true, false] {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        if b_first {
            graph.add_directed_edge(a, b, 1.0, None).unwrap();
            graph.add_directed_edge(a, c, 1.0, None).unwrap();
        } else {
            graph.add_directed_edge(a, c, 1.0, None).unwrap();
            graph.add_directed_edge(a, b, 1.0, None).unwrap();
        }
        graph.add_directed_edge(b, d, 1.0, None).unwrap();
        graph.add_directed_edge(c, d, 1.0, None).unwrap();

        let expected = if b_first { vec![a, b, d] } else { vec![a, c, d] };
        assert_eq!(graph.find_path(a, d).unwrap().into_nodes(), expected);
        assert_eq!(graph.shortest_path(a, d), Ok(expected));
    }
}

#[test]
fn improved_frontier_node_is_expanded_in_order() {
    init();
    // S -10-> X -1-> T, S -1-> Y -1-> X: X is lowered from 10 to 2 while on the frontier
    let mut graph: Graph = Graph::new();
    let s = graph.add_node("S");
    let x = graph.add_node("X");
    let y = graph.add_node("Y");
    let t = graph.add_node("T");
    graph.add_directed_edge(s, x, 10.0, None).unwrap();
    graph.add_directed_edge(s, y, 1.0, None).unwrap();
    graph.add_directed_edge(y, x, 1.0, None).unwrap();
    graph.add_directed_edge(x, t, 1.0, None).unwrap();

    let path = graph.search(s, t).unwrap().into_path().unwrap();
    assert_eq!(path.nodes, vec![s, y, x, t]);
    assert_eq!(path.cost, 3.0);
    assert_eq!(graph[x].predecessor(), Some(y));
}

#[test]
fn search_stops_at_end() {
    init();
    let (mut graph, [a, b, c]) = triangle();
    let d = graph.add_node("D");
    graph.add_directed_edge(c, d, 1.0, None).unwrap();

    graph.search(a, b).unwrap();
    assert!(graph[b].is_visited());
    // b was never relaxed, so c only knows the direct Edge
    assert!(!graph[c].is_visited());
    assert_eq!(graph[c].distance(), 5.0);
    assert!(!graph[d].is_reached());
}

#[test]
fn unreachable_component() {
    init();
    let (mut graph, [a, _, c]) = triangle();
    let island = graph.add_node("island");
    let other = graph.add_node("other");
    graph.add_undirected_edge(island, other, 1.0).unwrap();
    // only outbound Edges into the component
    graph.add_directed_edge(island, c, 1.0, None).unwrap();

    assert!(graph.search(a, island).unwrap().is_unreachable());
    // the whole component was finalized on the way
    assert!(graph[c].is_visited());
    assert!(!graph[other].is_reached());
}

#[test]
fn trace_of_found_path() {
    init();
    let (mut graph, [a, _, c]) = triangle();
    let path = graph.shortest_path(a, c).unwrap();

    assert_eq!(
        graph.trace(&path).to_string(),
        "(A, 0) -> (B, 1) -> (C, 3) -> x"
    );
    graph.print_path(&path);
}

#[test]
fn metadata_is_kept() {
    init();
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    graph.add_directed_edge(a, b, 1.0, Some("ferry")).unwrap();

    assert_eq!(graph.edge(a, b).unwrap().metadata(), Some(&"ferry"));
    assert_eq!(graph.shortest_path(a, b), Ok(vec![a, b]));
}

#[test]
fn batch_of_detached_searches() {
    init();
    let (graph, [a, b, c]) = triangle();

    let results = graph.find_paths(&[(a, c), (c, a), (b, b), (a, 42)]);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].clone().unwrap().into_nodes(), vec![a, b, c]);
    assert_eq!(results[1], Ok(SearchOutcome::Unreachable));
    assert_eq!(results[2], Ok(SearchOutcome::Trivial));
    assert_eq!(results[3], Err(GraphError::UnknownNode(42)));
    assert!(graph.iter().all(|(_, node)| !node.is_reached()));
}

#[test]
fn random_graphs_match_bellman_ford() {
    init();
    let mut rng = WyRand::new_seed(4);
    for _ in 0..30 {
        let node_count = rng.generate_range(2_usize..25);
        let edge_count = rng.generate_range(0_usize..80);
        let mut graph = random_graph(&mut rng, node_count, edge_count);
        let start = rng.generate_range(0..node_count);
        let expected = bellman_ford(&graph, start);

        for end in 0..node_count {
            let detached = graph.find_path(start, end).unwrap();

            graph.reset_search_state();
            let outcome = graph.search(start, end).unwrap();
            assert_eq!(outcome, detached);

            if start == end {
                assert!(outcome.is_trivial());
                continue;
            }
            match outcome {
                SearchOutcome::Found(path) => {
                    assert_eq!(path.cost, expected[end]);
                    assert_eq!(path.cost, graph[end].distance());
                    assert_eq!(walk_cost(&graph, &path), path.cost);
                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.end(), Some(end));
                }
                SearchOutcome::Unreachable => assert_eq!(expected[end], Cost::INFINITY),
                SearchOutcome::Trivial => unreachable!(),
            }
        }
    }
}

#[test]
fn finalized_distances_are_final() {
    init();
    let mut rng = WyRand::new_seed(17);
    for _ in 0..20 {
        let node_count = rng.generate_range(2_usize..20);
        let edge_count = rng.generate_range(node_count..node_count * 4);
        let mut graph = random_graph(&mut rng, node_count, edge_count);
        let start = rng.generate_range(0..node_count);
        let end = rng.generate_range(0..node_count);
        let expected = bellman_ford(&graph, start);

        graph.search(start, end).unwrap();
        let visited: Vec<(NodeID, Cost, Option<NodeID>)> = graph
            .iter()
            .filter(|(_, node)| node.is_visited())
            .map(|(id, node)| (id, node.distance(), node.predecessor()))
            .collect();
        for &(id, distance, _) in visited.iter() {
            assert_eq!(distance, expected[id]);
        }

        // relaxing finalized Nodes again must not touch any finalized Node
        for &(id, _, _) in visited.iter() {
            graph.relax(id).unwrap();
        }
        for &(id, distance, predecessor) in visited.iter() {
            assert_eq!(graph[id].distance(), distance);
            assert_eq!(graph[id].predecessor(), predecessor);
        }
    }
}

#[test]
fn predecessors_lead_back_to_start() {
    init();
    let mut rng = WyRand::new_seed(99);
    let node_count = 40;
    let mut graph = random_graph(&mut rng, node_count, 160);
    let start = 0;

    // an unreachable end expands everything reachable
    let sink = graph.add_node("sink");
    assert!(graph.search(start, sink).unwrap().is_unreachable());

    for (id, node) in graph.iter() {
        if !node.is_visited() {
            continue;
        }
        let mut current = id;
        let mut steps = 0;
        while let Some(prev) = graph[current].predecessor() {
            current = prev;
            steps += 1;
            assert!(steps <= node_count, "cycle in predecessors of {}", id);
        }
        assert_eq!(current, start);
    }
}

#[test]
fn repeated_search_after_reset() {
    init();
    let mut rng = WyRand::new_seed(7);
    let mut graph = random_graph(&mut rng, 30, 120);

    let first = graph.search(3, 17).unwrap();
    graph.reset_search_state();
    let second = graph.search(3, 17).unwrap();
    assert_eq!(first, second);
    assert_eq!(graph.find_path(3, 17).unwrap(), first);
}
