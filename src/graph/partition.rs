use crate::graph::{Color, Coloring, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered sequence of vertex blocks. A generated partition splits the vertex
/// domain into independent sets; `verify_partition` checks that property for
/// arbitrary inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    blocks: Vec<BTreeSet<Vertex>>,
}

impl Partition {
    pub fn new(blocks: Vec<BTreeSet<Vertex>>) -> Self {
        Partition { blocks }
    }

    pub fn from_blocks<I, B>(blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: IntoIterator<Item = Vertex>,
    {
        Partition {
            blocks: blocks
                .into_iter()
                .map(|block| block.into_iter().collect())
                .collect(),
        }
    }

    pub fn k(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &[BTreeSet<Vertex>] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&BTreeSet<Vertex>> {
        self.blocks.get(index)
    }

    pub fn block_of(&self, vertex: Vertex) -> Option<usize> {
        self.blocks.iter().position(|block| block.contains(&vertex))
    }

    pub fn block_sizes(&self) -> Vec<usize> {
        self.blocks.iter().map(BTreeSet::len).collect()
    }

    /// Colours every vertex with the index of its block. Vertices outside
    /// `[0, n)` are skipped; a vertex listed twice keeps its first block.
    pub fn to_coloring(&self, n: u32) -> Coloring {
        let mut colors = vec![None; n as usize];
        for (index, block) in self.blocks.iter().enumerate() {
            for &vertex in block {
                if let Some(slot) = colors.get_mut(vertex as usize) {
                    if slot.is_none() {
                        *slot = Some(index as Color);
                    }
                }
            }
        }
        Coloring::from(colors)
    }
}
