use crate::graph::Vertex;
use crate::validate::ColoringViolation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by graph construction, instance generation and the online
/// colouring algorithms.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("vertex {vertex} out of range for graph with {n} vertices")]
    OutOfRange { vertex: Vertex, n: u32 },
    /// An odd cycle closed by the edge `vertex`-`neighbor` while revealing `vertex`.
    #[error("graph is not bipartite: odd cycle closed by edge ({vertex}, {neighbor})")]
    NotBipartite { vertex: Vertex, neighbor: Vertex },
    #[error("vertex {vertex} is already colored")]
    AlreadyColored { vertex: Vertex },
    #[error("generated instance failed verification: {0}")]
    InvalidInstance(String),
    #[error("{algorithm} produced an invalid coloring: {violation}")]
    InvalidColoring {
        algorithm: String,
        violation: ColoringViolation,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("encoding error: {0}")]
    Encode(#[from] bincode::Error),
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn is_not_bipartite(&self) -> bool {
        matches!(self, Error::NotBipartite { .. })
    }
}
