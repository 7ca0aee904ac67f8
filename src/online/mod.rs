pub mod cbip;
pub mod first_fit;
pub mod ordering;
pub mod reveal;

pub use cbip::{cbip, cbip_in_order, Cbip};
pub use first_fit::{first_fit, first_fit_degree, first_fit_in_order, first_fit_smallest_last, FirstFit};
pub use ordering::{degree_order, random_order, smallest_last_order};
pub use reveal::{RevealSequence, Revealed};

use crate::error::Result;
use crate::graph::{Color, Coloring, Graph, Vertex};
use serde::{Deserialize, Serialize};

/// Decision rule of an online colouring algorithm. It sees one revealed
/// vertex at a time together with the colours committed so far.
pub trait OnlineColorer {
    fn assign(&mut self, step: &Revealed, coloring: &Coloring) -> Result<Color>;
}

/// Runs `colorer` over `graph` in the given reveal order, committing each
/// colour before the next vertex is revealed.
pub fn color_online<C: OnlineColorer + ?Sized>(
    graph: &Graph,
    order: Vec<Vertex>,
    colorer: &mut C,
) -> Result<Coloring> {
    let mut coloring = Coloring::new(graph.vertex_count());
    for step in RevealSequence::new(graph, order)? {
        let color = colorer.assign(&step, &coloring)?;
        coloring.assign(step.vertex, color)?;
    }
    Ok(coloring)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    FirstFit,
    FirstFitDegree,
    FirstFitSmallestLast,
    Cbip,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FirstFit,
        Algorithm::FirstFitDegree,
        Algorithm::FirstFitSmallestLast,
        Algorithm::Cbip,
    ];

    /// `seed` drives the random reveal order; the degree and smallest-last
    /// variants ignore it.
    pub fn run(self, graph: &Graph, seed: u64) -> Result<Coloring> {
        match self {
            Algorithm::FirstFit => first_fit(graph, seed),
            Algorithm::FirstFitDegree => first_fit_degree(graph),
            Algorithm::FirstFitSmallestLast => first_fit_smallest_last(graph),
            Algorithm::Cbip => cbip(graph, seed),
        }
    }

    pub fn requires_bipartite(self) -> bool {
        matches!(self, Algorithm::Cbip)
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::FirstFit => "FirstFit",
            Algorithm::FirstFitDegree => "FirstFit+Degree",
            Algorithm::FirstFitSmallestLast => "FirstFit+SmallestLast",
            Algorithm::Cbip => "CBIP",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "firstfit" | "first-fit" | "ff" => Ok(Algorithm::FirstFit),
            "firstfit+degree" | "first-fit-degree" | "degree" => Ok(Algorithm::FirstFitDegree),
            "firstfit+smallestlast" | "first-fit-smallest-last" | "smallest-last" | "sl" => {
                Ok(Algorithm::FirstFitSmallestLast)
            }
            "cbip" => Ok(Algorithm::Cbip),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}
