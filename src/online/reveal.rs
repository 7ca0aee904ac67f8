use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::utils::permutation::check_permutation;
use bitvec::prelude::*;
use smallvec::SmallVec;

/// One step of an online presentation: the vertex being revealed and its
/// edges to vertices revealed before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub step: usize,
    pub vertex: Vertex,
    pub earlier_neighbors: SmallVec<[Vertex; 8]>,
}

/// Presents a graph vertex by vertex in a fixed order. Each step only exposes
/// edges back to the already revealed prefix.
pub struct RevealSequence<'g> {
    graph: &'g Graph,
    order: Vec<Vertex>,
    revealed: BitVec,
    position: usize,
}

impl<'g> RevealSequence<'g> {
    pub fn new(graph: &'g Graph, order: Vec<Vertex>) -> Result<Self> {
        check_permutation(&order, graph.vertex_count())?;
        Ok(RevealSequence {
            graph,
            revealed: bitvec![0; order.len()],
            order,
            position: 0,
        })
    }

    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    pub fn revealed_count(&self) -> usize {
        self.position
    }
}

impl Iterator for RevealSequence<'_> {
    type Item = Revealed;

    fn next(&mut self) -> Option<Revealed> {
        let vertex = *self.order.get(self.position)?;
        let earlier_neighbors = self
            .graph
            .adjacent(vertex)
            .iter()
            .copied()
            .filter(|&u| self.revealed[u as usize])
            .collect();
        self.revealed.set(vertex as usize, true);
        let step = self.position;
        self.position += 1;
        Some(Revealed {
            step,
            vertex,
            earlier_neighbors,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealSequence<'_> {}
