use crate::error::{Error, Result};
use crate::graph::{Color, Coloring, Graph, Vertex};
use crate::online::ordering::random_order;
use crate::online::reveal::Revealed;
use crate::online::{color_online, OnlineColorer};
use fxhash::FxHashSet;

#[derive(Debug, Default)]
struct Component {
    members: Vec<Vertex>,
    side_colors: [FxHashSet<Color>; 2],
}

/// Online colouring for bipartite graphs.
///
/// Every connected component of the revealed subgraph carries a two-sided
/// labelling. A new vertex starts as its own component and is merged with
/// the component of each earlier neighbour, flipping the smaller side of the
/// merge when needed so the two endpoints land on opposite sides. An earlier
/// neighbour that already shares the vertex's component and side witnesses
/// an odd cycle. The vertex then takes the smallest colour not used on the
/// opposite side of its component.
#[derive(Debug)]
pub struct Cbip {
    component_of: Vec<usize>,
    side: Vec<u8>,
    components: Vec<Component>,
}

impl Cbip {
    /// Tracks vertices in `[0, n)`. Revealing any other vertex fails with
    /// [`Error::OutOfRange`].
    pub fn new(n: u32) -> Self {
        Cbip {
            component_of: vec![usize::MAX; n as usize],
            side: vec![0; n as usize],
            components: Vec::new(),
        }
    }

    /// Side label (0 or 1) of a revealed vertex within its component.
    pub fn side_of(&self, v: Vertex) -> Option<u8> {
        match self.component_of.get(v as usize) {
            Some(&component) if component != usize::MAX => Some(self.side[v as usize]),
            _ => None,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components
            .iter()
            .filter(|component| !component.members.is_empty())
            .count()
    }

    fn open_component(&mut self, v: Vertex) -> usize {
        let id = self.components.len();
        self.components.push(Component {
            members: vec![v],
            side_colors: Default::default(),
        });
        self.component_of[v as usize] = id;
        self.side[v as usize] = 0;
        id
    }

    fn merge(&mut self, a: usize, b: usize, flip: bool) -> usize {
        let (keep, absorb) = if self.components[a].members.len() >= self.components[b].members.len() {
            (a, b)
        } else {
            (b, a)
        };

        let mut absorbed = std::mem::take(&mut self.components[absorb]);
        if flip {
            for &m in &absorbed.members {
                self.side[m as usize] ^= 1;
            }
            absorbed.side_colors.swap(0, 1);
        }
        tracing::trace!(keep, absorb, flip, moved = absorbed.members.len(), "merging components");

        for &m in &absorbed.members {
            self.component_of[m as usize] = keep;
        }
        let target = &mut self.components[keep];
        target.members.append(&mut absorbed.members);
        let [side0, side1] = absorbed.side_colors;
        target.side_colors[0].extend(side0);
        target.side_colors[1].extend(side1);
        keep
    }
}

impl OnlineColorer for Cbip {
    fn assign(&mut self, step: &Revealed, _coloring: &Coloring) -> Result<Color> {
        let v = step.vertex;
        let n = self.component_of.len() as u32;
        if let Some(&vertex) = std::iter::once(&v)
            .chain(&step.earlier_neighbors)
            .find(|&&w| w >= n)
        {
            return Err(Error::OutOfRange { vertex, n });
        }
        let mut own = self.open_component(v);

        for &u in &step.earlier_neighbors {
            let theirs = self.component_of[u as usize];
            let same_side = self.side[u as usize] == self.side[v as usize];
            if theirs == own {
                if same_side {
                    tracing::debug!(vertex = v, neighbor = u, "odd cycle detected");
                    return Err(Error::NotBipartite { vertex: v, neighbor: u });
                }
                continue;
            }
            own = self.merge(own, theirs, same_side);
        }

        let side = self.side[v as usize] as usize;
        let component = &mut self.components[own];
        let opposite = &component.side_colors[1 - side];
        let mut color: Color = 0;
        while opposite.contains(&color) {
            color += 1;
        }
        component.side_colors[side].insert(color);
        Ok(color)
    }
}

pub fn cbip_in_order(graph: &Graph, order: Vec<Vertex>) -> Result<Coloring> {
    color_online(graph, order, &mut Cbip::new(graph.vertex_count()))
}

/// CBIP over a uniformly random reveal order drawn from `seed`. Fails with
/// [`Error::NotBipartite`] once the revealed subgraph contains an odd cycle.
pub fn cbip(graph: &Graph, seed: u64) -> Result<Coloring> {
    cbip_in_order(graph, random_order(graph.vertex_count(), seed))
}
