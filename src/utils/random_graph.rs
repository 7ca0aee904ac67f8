use crate::error::{Error, Result};
use crate::graph::{Graph, Partition, Vertex};
use crate::utils::permutation::RandomPermutation;
use crate::validate::PartitionViolation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorParams {
    pub n: u32,
    pub k: u32,
    pub p: f64,
    pub seed: u64,
}

impl GeneratorParams {
    pub fn generate(&self) -> Result<(Graph, Partition)> {
        generate_k_colourable_graph(self.n, self.k, self.p, self.seed)
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedInstance {
    pub name: String,
    pub params: GeneratorParams,
    pub graph: Graph,
    pub partition: Partition,
}

/// Builds a random graph whose vertex set splits into `k` independent sets.
///
/// Vertices are shuffled and dealt round-robin into `k` blocks, so block
/// sizes differ by at most one. Every vertex is joined to one random vertex
/// of each other block, then every remaining cross-block pair becomes an edge
/// with probability `p`. The same arguments always produce the same graph
/// and partition.
pub fn generate_k_colourable_graph(
    n: u32,
    k: u32,
    p: f64,
    seed: u64,
) -> Result<(Graph, Partition)> {
    if k < 1 {
        return Err(Error::invalid("k must be at least 1"));
    }
    if k > n {
        return Err(Error::invalid(format!("k ({k}) cannot be greater than n ({n})")));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid(format!("p must be in [0.0, 1.0], got {p}")));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    let mut blocks: Vec<Vec<Vertex>> = vec![Vec::new(); k as usize];
    let mut block_of = vec![0usize; n as usize];
    let RandomPermutation(shuffled) = RandomPermutation::generate(n, &mut rng);
    for (position, vertex) in shuffled.into_iter().enumerate() {
        let block = position % k as usize;
        blocks[block].push(vertex);
        block_of[vertex as usize] = block;
    }
    for block in &mut blocks {
        block.sort_unstable();
    }

    for (i, block) in blocks.iter().enumerate() {
        for &v in block {
            for (j, other) in blocks.iter().enumerate() {
                if i == j {
                    continue;
                }
                let u = other[rng.random_range(0..other.len())];
                graph.add_edge(v, u)?;
            }
        }
    }
    let mandatory_edges = graph.edge_count();

    if p > 0.0 {
        for u in 0..n {
            for v in (u + 1)..n {
                if block_of[u as usize] == block_of[v as usize] || graph.adjacent(u).contains(&v) {
                    continue;
                }
                if rng.random::<f64>() < p {
                    graph.add_edge(u, v)?;
                }
            }
        }
    }

    tracing::debug!(
        n,
        k,
        p,
        seed,
        mandatory_edges,
        edges = graph.edge_count(),
        "generated k-colourable graph"
    );

    Ok((graph, Partition::from_blocks(blocks)))
}

/// Checks that the blocks are disjoint, cover every vertex and contain no
/// internal edge. Reports the first violation found.
pub fn verify_partition(graph: &Graph, partition: &Partition) -> std::result::Result<(), PartitionViolation> {
    let n = graph.vertex_count();
    let mut owner: Vec<Option<usize>> = vec![None; n as usize];

    for (index, block) in partition.blocks().iter().enumerate() {
        for &vertex in block {
            if vertex >= n {
                return Err(PartitionViolation::UnknownVertex { block: index, vertex });
            }
            if let Some(first) = owner[vertex as usize] {
                return Err(PartitionViolation::Overlap {
                    first,
                    second: index,
                    vertex,
                });
            }
            owner[vertex as usize] = Some(index);
        }
    }

    if let Some(vertex) = owner.iter().position(Option::is_none) {
        return Err(PartitionViolation::Uncovered {
            vertex: vertex as Vertex,
        });
    }

    for (u, v) in graph.edges() {
        if let (Some(bu), Some(bv)) = (owner[u as usize], owner[v as usize]) {
            if bu == bv {
                return Err(PartitionViolation::InternalEdge { block: bu, u, v });
            }
        }
    }

    Ok(())
}

/// Generates `per_setting` instances for every `(k, n)` pair, each with its
/// own seed drawn from `seed`. Pairs with `k > n` are skipped.
pub fn generate_many(
    n_values: &[u32],
    k_values: &[u32],
    p: f64,
    per_setting: usize,
    seed: u64,
) -> Result<Vec<GeneratedInstance>> {
    let mut seeds = ChaCha8Rng::seed_from_u64(seed);
    let mut instances = Vec::with_capacity(n_values.len() * k_values.len() * per_setting);

    for &k in k_values {
        for &n in n_values {
            if k > n {
                tracing::warn!(n, k, "skipping setting with k > n");
                continue;
            }
            for idx in 0..per_setting {
                let params = GeneratorParams {
                    n,
                    k,
                    p,
                    seed: seeds.random(),
                };
                let (graph, partition) = params.generate()?;
                let name = format!("graph_k{k}_n{n}_idx{idx}");
                if let Err(violation) = verify_partition(&graph, &partition) {
                    return Err(Error::InvalidInstance(format!("{name}: {violation}")));
                }
                instances.push(GeneratedInstance {
                    name,
                    params,
                    graph,
                    partition,
                });
            }
        }
    }

    Ok(instances)
}
