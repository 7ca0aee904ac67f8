//! Reveal orders. These see the whole graph; the colouring pass that consumes
//! them does not.

use crate::graph::{Graph, Vertex};
use crate::utils::permutation::RandomPermutation;
use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeSet;

pub fn random_order(n: u32, seed: u64) -> Vec<Vertex> {
    RandomPermutation::seeded(n, seed).0
}

/// Vertices by descending degree, ties broken by ascending index.
pub fn degree_order(graph: &Graph) -> Vec<Vertex> {
    let mut order: Vec<Vertex> = graph.vertices().collect();
    order.sort_by_key(|&v| (Reverse(graph.adjacent(v).len()), v));
    order
}

/// Smallest-last order: repeatedly remove a vertex of minimum remaining
/// degree (lowest index on ties); the vertex removed first is coloured last.
pub fn smallest_last_order(graph: &Graph) -> Vec<Vertex> {
    let n = graph.vertex_count() as usize;
    let mut degrees: Vec<usize> = graph.vertices().map(|v| graph.adjacent(v).len()).collect();
    let mut queue = DegreeBuckets::new(&degrees);
    let mut removed = bitvec![0; n];
    let mut elimination = Vec::with_capacity(n);

    while let Some(v) = queue.pop_min() {
        removed.set(v as usize, true);
        elimination.push(v);
        for &u in graph.adjacent(v) {
            if removed[u as usize] {
                continue;
            }
            let degree = &mut degrees[u as usize];
            queue.decrement(u, *degree);
            *degree -= 1;
        }
    }

    elimination.reverse();
    tracing::trace!(vertices = n, "computed smallest-last order");
    elimination
}

/// Bucket queue keyed by current degree. The minimum pointer only moves back
/// by one per decrement, so extraction stays cheap.
struct DegreeBuckets {
    buckets: Vec<BTreeSet<Vertex>>,
    min: usize,
}

impl DegreeBuckets {
    fn new(degrees: &[usize]) -> Self {
        let max = degrees.iter().copied().max().unwrap_or(0);
        let mut buckets = vec![BTreeSet::new(); max + 1];
        for (v, &degree) in degrees.iter().enumerate() {
            buckets[degree].insert(v as Vertex);
        }
        DegreeBuckets { buckets, min: 0 }
    }

    fn pop_min(&mut self) -> Option<Vertex> {
        while self.min < self.buckets.len() {
            if let Some(v) = self.buckets[self.min].pop_first() {
                return Some(v);
            }
            self.min += 1;
        }
        None
    }

    fn decrement(&mut self, v: Vertex, degree: usize) {
        if degree == 0 || !self.buckets[degree].remove(&v) {
            return;
        }
        self.buckets[degree - 1].insert(v);
        self.min = self.min.min(degree - 1);
    }
}
