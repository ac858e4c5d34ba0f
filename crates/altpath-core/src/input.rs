//! Graph input documents
//!
//! A document names the vertex count and one edge list per color:
//!
//! ```json
//! { "n": 3, "red": [[0, 1]], "blue": [[1, 2]] }
//! ```
//!
//! The same shape is accepted as TOML or YAML. Indices are read as signed
//! integers so that negative values are reported as range errors instead of
//! opaque parse failures.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AltPathError, Result, VertexRole};
use crate::graph::adjacency::check_vertex;
use crate::graph::{Color, Edge, Graph};

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
    Yaml,
}

impl InputFormat {
    pub const SUPPORTED: &'static str = "json, toml, yaml, yml";

    /// Pick a format from the file extension; files without one are JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(InputFormat::Json),
            Some(ext) => Self::from_extension(ext),
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => Err(AltPathError::unsupported(
                "graph format",
                other,
                Self::SUPPORTED,
            )),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Json => f.write_str("json"),
            InputFormat::Toml => f.write_str("toml"),
            InputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Unvalidated graph description as read from a document or the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub n: i64,
    #[serde(default, alias = "a")]
    pub red: Vec<[i64; 2]>,
    #[serde(default, alias = "b")]
    pub blue: Vec<[i64; 2]>,
    /// Vertex to measure from; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
}

impl GraphInput {
    pub fn parse(content: &str, format: InputFormat) -> Result<Self> {
        let input: Self = match format {
            InputFormat::Json => serde_json::from_str(content)?,
            InputFormat::Toml => toml::from_str(content)?,
            InputFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(input)
    }

    /// Load a document from disk, choosing the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = InputFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| AltPathError::io_operation("read graph", path.display(), e))?;
        tracing::debug!(path = %path.display(), %format, "load_graph_input");
        Self::parse(&content, format)
            .map_err(|e| AltPathError::invalid_document(path.display(), e))
    }

    /// Read a JSON document from `reader` (used for stdin)
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content, InputFormat::Json)
            .map_err(|e| AltPathError::invalid_document("<stdin>", e))
    }

    /// Vertex count as an index bound, rejecting `n < 1`
    pub fn vertex_count(&self) -> Result<usize> {
        match usize::try_from(self.n) {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(AltPathError::EmptyGraph { n: self.n }),
        }
    }

    /// The document's source vertex (0 when absent), validated against `n`
    pub fn source_vertex(&self) -> Result<usize> {
        self.check_source(self.source.unwrap_or(0))
    }

    /// Validate a source chosen elsewhere (a flag or the config) against `n`
    pub fn check_source(&self, source: i64) -> Result<usize> {
        check_vertex(source, self.vertex_count()?, VertexRole::QuerySource)
    }

    /// Validate every index and build the graph
    pub fn to_graph(&self) -> Result<Graph> {
        let n = self.vertex_count()?;
        let mut edges = Vec::with_capacity(self.red.len() + self.blue.len());
        for (list, color) in [(&self.red, Color::A), (&self.blue, Color::B)] {
            for &[from, to] in list {
                edges.push(Edge {
                    from: check_vertex(from, n, VertexRole::EdgeSource(color))?,
                    to: check_vertex(to, n, VertexRole::EdgeTarget(color))?,
                    color,
                });
            }
        }
        Graph::from_edges(n, edges)
    }
}
