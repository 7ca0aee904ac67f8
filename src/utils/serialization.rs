use crate::error::{Error, Result};
use crate::graph::{Graph, Partition, Vertex};
use crate::utils::random_graph::GeneratorParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes the EDGES text format: every undirected edge as the two lines
/// `u v` and `v u`, with 1-based labels.
pub fn write_edges<W: Write>(graph: &Graph, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for (u, v) in graph.edges() {
        writeln!(writer, "{} {}", u + 1, v + 1)?;
        writeln!(writer, "{} {}", v + 1, u + 1)?;
    }
    writer.flush()
}

/// Reads the EDGES text format. The vertex count is the largest label seen.
/// Comment lines (`#`, `%`) and lines without exactly two fields are skipped,
/// self-loops are dropped.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Graph> {
    let mut edges = Vec::new();
    let mut max_label = 0u32;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 2 {
            continue;
        }
        let u = parse_label(fields[0], index + 1)?;
        let v = parse_label(fields[1], index + 1)?;
        max_label = max_label.max(u).max(v);
        if u == v {
            tracing::warn!(line = index + 1, vertex = u, "ignoring self-loop");
            continue;
        }
        edges.push((u - 1, v - 1));
    }

    let mut graph = Graph::new(max_label);
    for (u, v) in edges {
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

fn parse_label(field: &str, line: usize) -> Result<Vertex> {
    let label: u32 = field.parse().map_err(|err| Error::Parse {
        line,
        message: format!("invalid vertex label '{field}': {err}"),
    })?;
    if label == 0 {
        return Err(Error::Parse {
            line,
            message: "vertex labels start at 1".to_string(),
        });
    }
    Ok(label)
}

pub fn save_to_edges_file<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let file = fs::File::create(path)?;
    write_edges(graph, file)?;
    Ok(())
}

pub fn load_from_edges_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = fs::File::open(path)?;
    read_edges(BufReader::new(file))
}

/// Binary snapshot of a generated instance. The graph is stored as an edge
/// list and rebuilt through [`Graph::add_edge`] on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInstance {
    pub n: u32,
    pub edges: Vec<(Vertex, Vertex)>,
    pub partition: Option<Partition>,
    pub metadata: Option<GeneratorParams>,
}

impl GraphInstance {
    pub fn new(graph: &Graph) -> Self {
        GraphInstance {
            n: graph.vertex_count(),
            edges: graph.edges().collect(),
            partition: None,
            metadata: None,
        }
    }

    pub fn with_metadata(graph: &Graph, partition: Partition, metadata: GeneratorParams) -> Self {
        GraphInstance {
            partition: Some(partition),
            metadata: Some(metadata),
            ..GraphInstance::new(graph)
        }
    }

    pub fn graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.n);
        for &(u, v) in &self.edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}

pub fn save_graph_instance<P: AsRef<Path>>(path: P, instance: &GraphInstance) -> Result<()> {
    let bytes = bincode::serialize(instance)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load_graph_instance<P: AsRef<Path>>(path: P) -> Result<GraphInstance> {
    let bytes = fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}
