use online_coloring::online::{Cbip, RevealSequence, Revealed};
use online_coloring::{
    cbip, cbip_in_order, color_online, first_fit_in_order, generate_k_colourable_graph,
    validate_coloring, Coloring, Error, Graph, OnlineColorer,
};
use std::collections::VecDeque;

fn graph_from(n: u32, edges: &[(u32, u32)]) -> Graph {
    let mut graph = Graph::new(n);
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn cycle(n: u32) -> Graph {
    let mut graph = Graph::new(n);
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n).unwrap();
    }
    graph
}

/// Breadth-first order over every component, so each vertex after a
/// component's root has an earlier neighbour.
fn connected_order(graph: &Graph) -> Vec<u32> {
    let mut seen = vec![false; graph.vertex_count() as usize];
    let mut order = Vec::new();
    for root in graph.vertices() {
        if seen[root as usize] {
            continue;
        }
        seen[root as usize] = true;
        let mut queue = VecDeque::from([root]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for u in graph.neighbors(v).unwrap() {
                if !seen[u as usize] {
                    seen[u as usize] = true;
                    queue.push_back(u);
                }
            }
        }
    }
    order
}

#[test]
fn triangle_is_not_bipartite() {
    let graph = graph_from(3, &[(0, 1), (1, 2), (0, 2)]);
    for seed in 0..20 {
        match cbip(&graph, seed) {
            Err(Error::NotBipartite { vertex, neighbor }) => {
                assert!(graph.has_edge(vertex, neighbor).unwrap());
            }
            other => panic!("expected NotBipartite for seed {seed}, got {other:?}"),
        }
    }
}

#[test]
fn odd_cycles_fail_in_any_order() {
    let graph = cycle(5);
    for seed in 0..20 {
        let err = cbip(&graph, seed).unwrap_err();
        assert!(err.is_not_bipartite());
        assert!(err.to_string().contains("not bipartite"));
    }
}

#[test]
fn even_cycle_uses_two_colors() {
    let graph = cycle(4);
    for seed in 0..20 {
        let coloring = cbip(&graph, seed).unwrap();
        assert_eq!(validate_coloring(&graph, &coloring), Ok(2));
    }
}

#[test]
fn complete_bipartite_uses_two_colors() {
    let mut graph = Graph::new(6);
    for u in 0..3 {
        for v in 3..6 {
            graph.add_edge(u, v).unwrap();
        }
    }
    for seed in 0..20 {
        let coloring = cbip(&graph, seed).unwrap();
        assert_eq!(validate_coloring(&graph, &coloring), Ok(2));
    }
}

#[test]
fn merging_components_keeps_earlier_colors_fixed() {
    // 0 and 3 sit on opposite sides but are revealed as isolated vertices
    let graph = graph_from(4, &[(0, 1), (1, 2), (2, 3)]);
    let coloring = cbip_in_order(&graph, vec![0, 3, 1, 2]).unwrap();
    assert_eq!(coloring.to_vec(), Some(vec![0, 1, 2, 0]));
    assert_eq!(validate_coloring(&graph, &coloring), Ok(3));
}

#[test]
fn connected_reveal_order_gives_exactly_two_colors() {
    for seed in 0..5 {
        let (graph, _) = generate_k_colourable_graph(60, 2, 0.1, seed).unwrap();
        let order = connected_order(&graph);
        let coloring = cbip_in_order(&graph, order.clone()).unwrap();
        assert_eq!(validate_coloring(&graph, &coloring), Ok(2));

        let first_fit = first_fit_in_order(&graph, order).unwrap();
        let ff_colors = validate_coloring(&graph, &first_fit).unwrap();
        assert!(ff_colors >= 2);
    }
}

#[test]
fn generated_bipartite_instances_never_fail() {
    for seed in 0..10 {
        let (graph, _) = generate_k_colourable_graph(50, 2, 0.3, seed).unwrap();
        let coloring = cbip(&graph, seed * 31 + 1).unwrap();
        let colors = validate_coloring(&graph, &coloring).unwrap();
        assert!(colors >= 2);
    }
}

#[test]
fn non_bipartite_generated_instances_fail() {
    // complete tripartite graph contains triangles
    let (graph, _) = generate_k_colourable_graph(12, 3, 1.0, 4).unwrap();
    for seed in 0..5 {
        assert!(matches!(cbip(&graph, seed), Err(Error::NotBipartite { .. })));
    }
}

#[test]
fn cbip_is_deterministic_per_seed() {
    let (graph, _) = generate_k_colourable_graph(40, 2, 0.05, 8).unwrap();
    assert_eq!(cbip(&graph, 3).unwrap(), cbip(&graph, 3).unwrap());
}

#[test]
fn failure_happens_before_the_closing_vertex_is_colored() {
    let graph = graph_from(3, &[(0, 1), (1, 2), (0, 2)]);
    let mut colorer = Cbip::new(3);
    let mut coloring = Coloring::new(3);
    let steps: Vec<Revealed> = RevealSequence::new(&graph, vec![0, 1, 2]).unwrap().collect();

    for step in &steps[..2] {
        let color = colorer.assign(step, &coloring).unwrap();
        coloring.assign(step.vertex, color).unwrap();
    }
    assert_eq!(colorer.component_count(), 1);
    assert_ne!(colorer.side_of(0), colorer.side_of(1));

    let err = colorer.assign(&steps[2], &coloring).unwrap_err();
    assert!(matches!(err, Error::NotBipartite { vertex: 2, .. }));
    assert!(!coloring.is_colored(2));
}

#[test]
fn undersized_colorer_rejects_vertices_beyond_its_domain() {
    let graph = graph_from(5, &[(3, 4)]);
    let result = color_online(&graph, vec![0, 1, 2, 3, 4], &mut Cbip::new(3));
    assert!(matches!(result, Err(Error::OutOfRange { vertex: 3, n: 3 })));

    let step = Revealed {
        step: 0,
        vertex: 1,
        earlier_neighbors: [4].into_iter().collect(),
    };
    let mut colorer = Cbip::new(3);
    let err = colorer.assign(&step, &Coloring::new(3)).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { vertex: 4, n: 3 }));
    assert_eq!(colorer.side_of(1), None);
}
