use crate::error::{Error, Result};
use std::collections::BTreeSet;

pub type Vertex = u32;

/// Undirected simple graph over the fixed vertex domain `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: u32,
    adjacency: Vec<BTreeSet<Vertex>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(n: u32) -> Self {
        Graph {
            n,
            adjacency: vec![BTreeSet::new(); n as usize],
            edge_count: 0,
        }
    }

    /// Checked constructor for callers holding a signed vertex count.
    pub fn try_new(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(Error::invalid(format!(
                "number of vertices must be non-negative, got {n}"
            )));
        }
        let n = u32::try_from(n)
            .map_err(|_| Error::invalid(format!("number of vertices {n} is too large")))?;
        Ok(Graph::new(n))
    }

    pub fn vertex_count(&self) -> u32 {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.n
    }

    /// Inserts the undirected edge `{u, v}`. Returns `false` when the edge was
    /// already present.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(Error::invalid(format!("self-loop on vertex {u}")));
        }

        let inserted = self.adjacency[u as usize].insert(v);
        if inserted {
            self.adjacency[v as usize].insert(u);
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[u as usize].contains(&v))
    }

    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v as usize].len())
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v as usize].iter().copied())
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Every edge exactly once as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            let u = u as Vertex;
            neighbors.range(u + 1..).map(move |&v| (u, v))
        })
    }

    /// BLAKE3 digest over the vertex count and the ordered edge list. Two
    /// graphs share a fingerprint exactly when they have the same edge set.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.n.to_be_bytes());
        for (u, v) in self.edges() {
            hasher.update(&u.to_be_bytes());
            hasher.update(&v.to_be_bytes());
        }
        hasher.finalize().into()
    }

    pub(crate) fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v >= self.n {
            return Err(Error::OutOfRange { vertex: v, n: self.n });
        }
        Ok(())
    }

    /// Unchecked neighbour access for callers that validated `v` already.
    pub(crate) fn adjacent(&self, v: Vertex) -> &BTreeSet<Vertex> {
        &self.adjacency[v as usize]
    }
}
