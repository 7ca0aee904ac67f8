use crate::error::{Error, Result};
use crate::graph::Vertex;
use bitvec::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPermutation(pub Vec<Vertex>);

impl RandomPermutation {
    pub fn generate(n: u32, rng: &mut impl Rng) -> Self {
        let mut values: Vec<Vertex> = (0..n).collect();
        values.shuffle(rng);
        RandomPermutation(values)
    }

    pub fn seeded(n: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(n, &mut rng)
    }
}

/// Rejects any sequence that is not a permutation of `[0, n)`.
pub fn check_permutation(order: &[Vertex], n: u32) -> Result<()> {
    if order.len() != n as usize {
        return Err(Error::invalid(format!(
            "reveal order has {} entries, expected {n}",
            order.len()
        )));
    }
    let mut seen = bitvec![0; n as usize];
    for &vertex in order {
        if vertex >= n {
            return Err(Error::OutOfRange { vertex, n });
        }
        if seen.replace(vertex as usize, true) {
            return Err(Error::invalid(format!(
                "vertex {vertex} appears twice in reveal order"
            )));
        }
    }
    Ok(())
}
