pub mod coloring;
pub mod graph;
pub mod partition;

pub use coloring::{Color, Coloring};
pub use graph::{Graph, Vertex};
pub use partition::Partition;
