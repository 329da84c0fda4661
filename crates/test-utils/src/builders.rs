#![allow(dead_code)]

use std::fmt::Write;

/// Builder for the whitespace-separated integer input every command reads.
///
/// ```text
/// n m
/// u v [w]     (m lines)
/// x y         (optional trailer, e.g. a query pair)
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphInputBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, Option<i64>)>,
    trailer: Vec<i64>,
}

impl GraphInputBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    pub fn edge(mut self, from: usize, to: usize) -> Self {
        self.edges.push((from, to, None));
        self
    }

    pub fn weighted_edge(mut self, from: usize, to: usize, weight: i64) -> Self {
        self.edges.push((from, to, Some(weight)));
        self
    }

    pub fn edges(mut self, edges: &[(usize, usize)]) -> Self {
        for &(from, to) in edges {
            self.edges.push((from, to, None));
        }
        self
    }

    pub fn weighted_edges(mut self, edges: &[(usize, usize, i64)]) -> Self {
        for &(from, to, w) in edges {
            self.edges.push((from, to, Some(w)));
        }
        self
    }

    /// Query pair appended after the edge list.
    pub fn query(mut self, x: usize, y: usize) -> Self {
        self.trailer = vec![x as i64, y as i64];
        self
    }

    pub fn build(self) -> String {
        let mut s = String::new();
        writeln!(s, "{} {}", self.vertex_count, self.edges.len()).unwrap();
        for (from, to, weight) in &self.edges {
            match weight {
                Some(w) => writeln!(s, "{from} {to} {w}").unwrap(),
                None => writeln!(s, "{from} {to}").unwrap(),
            }
        }
        if !self.trailer.is_empty() {
            let trailer: Vec<String> = self.trailer.iter().map(i64::to_string).collect();
            writeln!(s, "{}", trailer.join(" ")).unwrap();
        }
        s
    }
}

/// 1-based chain `1 -> 2 -> ... -> n` with the given weights.
pub fn weighted_chain(weights: &[i64]) -> GraphInputBuilder {
    let mut builder = GraphInputBuilder::new(weights.len() + 1);
    for (i, &w) in weights.iter().enumerate() {
        builder = builder.weighted_edge(i + 1, i + 2, w);
    }
    builder
}
