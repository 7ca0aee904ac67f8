use online_coloring::utils::random_graph::generate_many;
use online_coloring::{
    generate_k_colourable_graph, validate_coloring, verify_partition, Error, Graph, Partition,
    PartitionViolation,
};

#[test]
fn rejects_invalid_parameters() {
    for (n, k, p) in [(5, 0, 0.5), (3, 4, 0.5), (5, 2, -0.1), (5, 2, 1.5), (5, 2, f64::NAN)] {
        let result = generate_k_colourable_graph(n, k, p, 1);
        assert!(
            matches!(result, Err(Error::InvalidArgument(_))),
            "expected InvalidArgument for n={n}, k={k}, p={p}"
        );
    }
}

#[test]
fn generated_partition_is_valid_coloring() {
    let (graph, partition) = generate_k_colourable_graph(30, 3, 0.3, 7).unwrap();
    assert_eq!(verify_partition(&graph, &partition), Ok(()));
    assert_eq!(partition.k(), 3);

    let coloring = partition.to_coloring(graph.vertex_count());
    let colors = validate_coloring(&graph, &coloring).unwrap();
    assert!(colors <= 3);
}

#[test]
fn same_arguments_give_identical_instances() {
    let (g1, p1) = generate_k_colourable_graph(6, 2, 0.0, 42).unwrap();
    let (g2, p2) = generate_k_colourable_graph(6, 2, 0.0, 42).unwrap();
    assert_eq!(g1, g2);
    assert_eq!(p1, p2);
    assert_eq!(g1.fingerprint(), g2.fingerprint());

    let (g3, _) = generate_k_colourable_graph(40, 3, 0.4, 123).unwrap();
    let (g4, _) = generate_k_colourable_graph(40, 3, 0.4, 123).unwrap();
    assert_eq!(g3.edges().collect::<Vec<_>>(), g4.edges().collect::<Vec<_>>());
}

#[test]
fn blocks_are_balanced_and_non_empty() {
    let (_, partition) = generate_k_colourable_graph(10, 3, 0.2, 9).unwrap();
    let mut sizes = partition.block_sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 3, 4]);

    let (_, partition) = generate_k_colourable_graph(4, 4, 0.0, 9).unwrap();
    assert_eq!(partition.block_sizes(), vec![1, 1, 1, 1]);
}

#[test]
fn every_vertex_reaches_every_other_block() {
    let (graph, partition) = generate_k_colourable_graph(25, 4, 0.0, 3).unwrap();
    for v in graph.vertices() {
        let own = partition.block_of(v).unwrap();
        for (index, block) in partition.blocks().iter().enumerate() {
            if index == own {
                continue;
            }
            assert!(
                graph.neighbors(v).unwrap().any(|u| block.contains(&u)),
                "vertex {v} has no neighbour in block {index}"
            );
        }
    }
}

#[test]
fn probability_one_gives_complete_multipartite_graph() {
    let (graph, partition) = generate_k_colourable_graph(9, 3, 1.0, 5).unwrap();
    assert_eq!(partition.block_sizes(), vec![3, 3, 3]);
    // 36 vertex pairs minus 3 intra-block pairs in each of the 3 blocks
    assert_eq!(graph.edge_count(), 27);
}

#[test]
fn single_block_has_no_edges() {
    let (graph, partition) = generate_k_colourable_graph(8, 1, 1.0, 11).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(partition.block_sizes(), vec![8]);
}

#[test]
fn verify_partition_reports_first_violation() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(2, 3).unwrap();

    let ok = Partition::from_blocks(vec![vec![0, 2], vec![1, 3]]);
    assert_eq!(verify_partition(&graph, &ok), Ok(()));

    let overlap = Partition::from_blocks(vec![vec![0, 2], vec![1, 2, 3]]);
    assert_eq!(
        verify_partition(&graph, &overlap),
        Err(PartitionViolation::Overlap {
            first: 0,
            second: 1,
            vertex: 2
        })
    );

    let uncovered = Partition::from_blocks(vec![vec![0, 2], vec![1]]);
    assert_eq!(
        verify_partition(&graph, &uncovered),
        Err(PartitionViolation::Uncovered { vertex: 3 })
    );

    let unknown = Partition::from_blocks(vec![vec![0, 2, 7], vec![1, 3]]);
    assert_eq!(
        verify_partition(&graph, &unknown),
        Err(PartitionViolation::UnknownVertex { block: 0, vertex: 7 })
    );

    let internal = Partition::from_blocks(vec![vec![0, 1], vec![2], vec![3]]);
    let violation = verify_partition(&graph, &internal).unwrap_err();
    assert_eq!(violation, PartitionViolation::InternalEdge { block: 0, u: 0, v: 1 });
    assert!(violation.to_string().contains("(0, 1)"));
}

#[test]
fn batch_generation_names_and_verifies_instances() {
    let instances = generate_many(&[5, 8], &[2, 6], 0.3, 2, 99).unwrap();
    // k = 6 only fits n = 8
    assert_eq!(instances.len(), 2 * 2 + 2);
    assert_eq!(instances[0].name, "graph_k2_n5_idx0");
    assert_eq!(instances.last().unwrap().name, "graph_k6_n8_idx1");
    for instance in &instances {
        assert_eq!(verify_partition(&instance.graph, &instance.partition), Ok(()));
        let (graph, _) = instance.params.generate().unwrap();
        assert_eq!(graph, instance.graph);
    }

    let again = generate_many(&[5, 8], &[2, 6], 0.3, 2, 99).unwrap();
    let seeds: Vec<u64> = instances.iter().map(|i| i.params.seed).collect();
    let seeds_again: Vec<u64> = again.iter().map(|i| i.params.seed).collect();
    assert_eq!(seeds, seeds_again);
}
