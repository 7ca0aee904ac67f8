use crate::error::Result;
use crate::graph::{Color, Coloring, Graph, Vertex};
use crate::online::ordering::{degree_order, random_order, smallest_last_order};
use crate::online::reveal::Revealed;
use crate::online::{color_online, OnlineColorer};
use bitvec::prelude::*;

/// Gives each revealed vertex the smallest colour absent from its earlier
/// neighbours.
#[derive(Debug, Default)]
pub struct FirstFit {
    used: BitVec,
}

impl FirstFit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OnlineColorer for FirstFit {
    fn assign(&mut self, step: &Revealed, coloring: &Coloring) -> Result<Color> {
        // d earlier neighbours block at most d colours, so 0..=d holds a free one
        let limit = step.earlier_neighbors.len() + 1;
        self.used.clear();
        self.used.resize(limit, false);
        for &u in &step.earlier_neighbors {
            if let Some(color) = coloring.color_of(u) {
                if (color as usize) < limit {
                    self.used.set(color as usize, true);
                }
            }
        }
        Ok(self.used.first_zero().unwrap_or(limit) as Color)
    }
}

pub fn first_fit_in_order(graph: &Graph, order: Vec<Vertex>) -> Result<Coloring> {
    color_online(graph, order, &mut FirstFit::new())
}

/// FirstFit over a uniformly random reveal order drawn from `seed`.
pub fn first_fit(graph: &Graph, seed: u64) -> Result<Coloring> {
    first_fit_in_order(graph, random_order(graph.vertex_count(), seed))
}

pub fn first_fit_degree(graph: &Graph) -> Result<Coloring> {
    first_fit_in_order(graph, degree_order(graph))
}

pub fn first_fit_smallest_last(graph: &Graph) -> Result<Coloring> {
    first_fit_in_order(graph, smallest_last_order(graph))
}
