pub mod error;
pub mod experiment;
pub mod graph;
pub mod logging;
pub mod online;
pub mod utils;
pub mod validate;

pub use error::{Error, Result};
pub use graph::*;
pub use online::{
	cbip,
	cbip_in_order,
	color_online,
	first_fit,
	first_fit_degree,
	first_fit_in_order,
	first_fit_smallest_last,
	Algorithm,
	OnlineColorer,
};
pub use utils::random_graph::{generate_k_colourable_graph, verify_partition, GeneratorParams};
pub use validate::{validate_coloring, ColoringViolation, PartitionViolation};
