use crate::error::{Error, Result};
use crate::graph::Vertex;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

pub type Color = u32;

/// Vertex to colour map over `[0, n)`. Colours are recorded once and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    colors: Vec<Option<Color>>,
}

impl Coloring {
    pub fn new(n: u32) -> Self {
        Coloring {
            colors: vec![None; n as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.colors.len() as u32
    }

    pub fn assign(&mut self, vertex: Vertex, color: Color) -> Result<()> {
        let n = self.width();
        let slot = self
            .colors
            .get_mut(vertex as usize)
            .ok_or(Error::OutOfRange { vertex, n })?;
        if slot.is_some() {
            return Err(Error::AlreadyColored { vertex });
        }
        *slot = Some(color);
        Ok(())
    }

    pub fn color_of(&self, vertex: Vertex) -> Option<Color> {
        self.colors.get(vertex as usize).copied().flatten()
    }

    pub fn is_colored(&self, vertex: Vertex) -> bool {
        self.color_of(vertex).is_some()
    }

    pub fn colored_count(&self) -> usize {
        self.colors.iter().filter(|color| color.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    /// Number of distinct colours in use.
    pub fn color_count(&self) -> usize {
        self.colors
            .iter()
            .flatten()
            .collect::<FxHashSet<_>>()
            .len()
    }

    pub fn max_color(&self) -> Option<Color> {
        self.colors.iter().flatten().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Option<Color>)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(vertex, color)| (vertex as Vertex, *color))
    }

    /// The dense colour vector, if every vertex is coloured.
    pub fn to_vec(&self) -> Option<Vec<Color>> {
        self.colors.iter().copied().collect()
    }
}

impl From<Vec<Color>> for Coloring {
    fn from(colors: Vec<Color>) -> Self {
        Coloring {
            colors: colors.into_iter().map(Some).collect(),
        }
    }
}

impl From<Vec<Option<Color>>> for Coloring {
    fn from(colors: Vec<Option<Color>>) -> Self {
        Coloring { colors }
    }
}
