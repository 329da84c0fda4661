// src/input/reader.rs

use std::io::BufRead;

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::graph::{EdgeList, Indexing, Vertex};
use crate::input::tokens::Tokens;

/// Declared sizes: `n` vertices followed by `m` edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Shape of one edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFormat {
    /// `u v`
    Unweighted,
    /// `u v w`
    Weighted,
}

/// Reads the `n m` + edge-list grammar shared by all commands.
///
/// Every count and vertex is bounds-checked; malformed input becomes a
/// [`GraphError`] instead of an out-of-range access.
pub struct GraphReader<R> {
    tokens: Tokens<R>,
}

impl<R: BufRead> GraphReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokens::new(reader),
        }
    }

    pub fn read_header(&mut self) -> Result<Header> {
        let vertex_count = self.read_count("vertex count")?;
        let edge_count = self.read_count("edge count")?;
        debug!(vertex_count, edge_count, "read graph header");
        Ok(Header {
            vertex_count,
            edge_count,
        })
    }

    pub fn read_edges(
        &mut self,
        header: &Header,
        indexing: Indexing,
        format: EdgeFormat,
    ) -> Result<EdgeList> {
        let mut edges = EdgeList::new(header.vertex_count, indexing);
        // Declared count is untrusted.
        edges.edges.reserve(header.edge_count.min(4096));

        for i in 0..header.edge_count {
            let from = self.read_endpoint(&format!("source of edge {}", i + 1), &edges)?;
            let to = self.read_endpoint(&format!("destination of edge {}", i + 1), &edges)?;
            let weight = match format {
                EdgeFormat::Unweighted => None,
                EdgeFormat::Weighted => Some(
                    self.tokens
                        .next_int(&format!("weight of edge {}", i + 1))?,
                ),
            };
            edges.push(from, to, weight)?;
        }

        debug!(edges = edges.edges.len(), ?indexing, "read edge list");
        Ok(edges)
    }

    /// A single vertex id that must belong to `edges`' vertex range.
    pub fn read_vertex(&mut self, what: &str, edges: &EdgeList) -> Result<Vertex> {
        self.read_endpoint(what, edges)
    }

    /// A vertex pair that may be missing entirely. Input that ends after
    /// the first vertex of the pair is still an error.
    pub fn read_optional_pair(
        &mut self,
        what: &str,
        edges: &EdgeList,
    ) -> Result<Option<(Vertex, Vertex)>> {
        let Some(first) = self.tokens.next_int_opt(what)? else {
            return Ok(None);
        };
        let first = to_vertex(first, edges)?;
        let second = self.read_endpoint(what, edges)?;
        Ok(Some((first, second)))
    }

    fn read_count(&mut self, what: &str) -> Result<usize> {
        let raw = self.tokens.next_int(what)?;
        usize::try_from(raw).map_err(|_| {
            GraphError::InvalidInput(format!("{what} must be non-negative, got {raw}"))
        })
    }

    fn read_endpoint(&mut self, what: &str, edges: &EdgeList) -> Result<Vertex> {
        let raw = self.tokens.next_int(what)?;
        to_vertex(raw, edges)
    }
}

fn to_vertex(raw: i64, edges: &EdgeList) -> Result<Vertex> {
    let bounds = edges.indexing.bounds(edges.vertex_count);
    if !bounds.contains(&raw) {
        return Err(GraphError::VertexOutOfRange {
            vertex: raw,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }
    // In range, hence non-negative.
    Ok(raw as Vertex)
}
