use crate::graph::{Color, Coloring, Graph, Vertex};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringViolation {
    #[error("coloring covers {actual} vertices but the graph has {expected}")]
    WidthMismatch { expected: u32, actual: u32 },
    #[error("vertex {vertex} has no color")]
    Uncolored { vertex: Vertex },
    #[error("adjacent vertices {u} and {v} both have color {color}")]
    Conflict { u: Vertex, v: Vertex, color: Color },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionViolation {
    #[error("block {block} contains vertex {vertex} outside the graph")]
    UnknownVertex { block: usize, vertex: Vertex },
    #[error("blocks {first} and {second} overlap on vertex {vertex}")]
    Overlap {
        first: usize,
        second: usize,
        vertex: Vertex,
    },
    #[error("vertex {vertex} is not covered by any block")]
    Uncovered { vertex: Vertex },
    #[error("edge ({u}, {v}) lies inside block {block}")]
    InternalEdge { block: usize, u: Vertex, v: Vertex },
}

/// Checks that every vertex is coloured and no edge joins two vertices of the
/// same colour. Returns the number of distinct colours on success, otherwise
/// the first violation in vertex order, then ascending edge order.
pub fn validate_coloring(graph: &Graph, coloring: &Coloring) -> Result<usize, ColoringViolation> {
    if coloring.width() != graph.vertex_count() {
        return Err(ColoringViolation::WidthMismatch {
            expected: graph.vertex_count(),
            actual: coloring.width(),
        });
    }

    if let Some((vertex, _)) = coloring.iter().find(|(_, color)| color.is_none()) {
        return Err(ColoringViolation::Uncolored { vertex });
    }

    for (u, v) in graph.edges() {
        if let (Some(cu), Some(cv)) = (coloring.color_of(u), coloring.color_of(v)) {
            if cu == cv {
                tracing::debug!(u, v, color = cu, "coloring rejected");
                return Err(ColoringViolation::Conflict { u, v, color: cu });
            }
        }
    }

    Ok(coloring.color_count())
}
