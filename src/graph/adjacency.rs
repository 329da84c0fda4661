// src/graph/adjacency.rs

use std::ops::RangeInclusive;

use crate::errors::{GraphError, Result};
use crate::graph::Vertex;

/// Numbering convention for vertex ids within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// Vertices are `0..n`.
    ZeroBased,
    /// Vertices are `1..=n`; slot 0 exists but is never used.
    OneBased,
}

impl Indexing {
    pub fn first(self) -> Vertex {
        match self {
            Indexing::ZeroBased => 0,
            Indexing::OneBased => 1,
        }
    }

    /// Number of adjacency slots needed for `vertex_count` vertices.
    pub fn slots(self, vertex_count: usize) -> usize {
        match self {
            Indexing::ZeroBased => vertex_count,
            Indexing::OneBased => vertex_count.saturating_add(1),
        }
    }

    /// Inclusive range of valid ids as signed bounds, for error reporting.
    ///
    /// For an empty graph the range is empty (`min > max`).
    pub fn bounds(self, vertex_count: usize) -> RangeInclusive<i64> {
        let first = self.first() as i64;
        let count = i64::try_from(vertex_count).unwrap_or(i64::MAX);
        first..=(first + (count - 1))
    }

    /// All valid vertex ids in increasing order.
    pub fn vertices(self, vertex_count: usize) -> impl Iterator<Item = Vertex> {
        let first = self.first();
        first..first + vertex_count
    }
}

/// One edge record as read from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Option<i64>,
}

/// Declared vertex count plus the validated edge records of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub indexing: Indexing,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(vertex_count: usize, indexing: Indexing) -> Self {
        Self {
            vertex_count,
            indexing,
            edges: Vec::new(),
        }
    }

    /// Append an edge, rejecting endpoints outside the declared range.
    pub fn push(&mut self, from: Vertex, to: Vertex, weight: Option<i64>) -> Result<()> {
        for v in [from, to] {
            if !self.contains(v) {
                let bounds = self.indexing.bounds(self.vertex_count);
                return Err(GraphError::VertexOutOfRange {
                    vertex: v as i64,
                    min: *bounds.start(),
                    max: *bounds.end(),
                });
            }
        }
        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v >= self.indexing.first() && v < self.indexing.first() + self.vertex_count
    }
}

/// Outgoing adjacency entry: anything that points at a target vertex.
pub trait HasTarget {
    fn target(&self) -> Vertex;
}

impl HasTarget for Vertex {
    fn target(&self) -> Vertex {
        *self
    }
}

/// Weighted outgoing arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedArc {
    pub to: Vertex,
    pub weight: i64,
}

impl HasTarget for WeightedArc {
    fn target(&self) -> Vertex {
        self.to
    }
}

/// Adjacency-list graph. Neighbor lists keep input order.
///
/// Built once from an [`EdgeList`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<E> {
    vertex_count: usize,
    indexing: Indexing,
    lists: Vec<Vec<E>>,
}

pub type UnweightedGraph = Graph<Vertex>;
pub type WeightedGraph = Graph<WeightedArc>;

impl<E> Graph<E> {
    /// Graph with no edges. Fails instead of aborting when the declared
    /// vertex count cannot be allocated.
    fn empty(vertex_count: usize, indexing: Indexing) -> Result<Self> {
        let slots = indexing.slots(vertex_count);
        let mut lists = Vec::new();
        lists.try_reserve_exact(slots).map_err(|_| {
            GraphError::InvalidInput(format!("vertex count {vertex_count} is too large"))
        })?;
        lists.resize_with(slots, Vec::new);
        Ok(Self {
            vertex_count,
            indexing,
            lists,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn indexing(&self) -> Indexing {
        self.indexing
    }

    /// Number of slots in per-vertex tables (`n + 1` for 1-based graphs).
    pub fn slots(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.indexing.vertices(self.vertex_count)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v >= self.indexing.first() && v < self.indexing.first() + self.vertex_count
    }

    /// Outgoing entries of `v`; empty for ids outside the graph.
    pub fn neighbors(&self, v: Vertex) -> &[E] {
        if self.contains(v) {
            &self.lists[v]
        } else {
            &[]
        }
    }

    /// Validate a user-chosen vertex (e.g. a source) against this graph.
    pub fn check_vertex(&self, v: Vertex) -> Result<Vertex> {
        if self.contains(v) {
            Ok(v)
        } else {
            let bounds = self.indexing.bounds(self.vertex_count);
            Err(GraphError::VertexOutOfRange {
                vertex: v as i64,
                min: *bounds.start(),
                max: *bounds.end(),
            })
        }
    }
}

impl Graph<Vertex> {
    /// Each edge is inserted in both directions.
    pub fn undirected(edges: &EdgeList) -> Result<Self> {
        let mut graph = Self::empty(edges.vertex_count, edges.indexing)?;
        for e in &edges.edges {
            graph.lists[e.from].push(e.to);
            graph.lists[e.to].push(e.from);
        }
        Ok(graph)
    }

    pub fn directed(edges: &EdgeList) -> Result<Self> {
        let mut graph = Self::empty(edges.vertex_count, edges.indexing)?;
        for e in &edges.edges {
            graph.lists[e.from].push(e.to);
        }
        Ok(graph)
    }
}

impl Graph<WeightedArc> {
    /// Directed weighted graph; every edge record must carry a weight.
    pub fn weighted(edges: &EdgeList) -> Result<Self> {
        let mut graph = Self::empty(edges.vertex_count, edges.indexing)?;
        for e in &edges.edges {
            let weight = e.weight.ok_or_else(|| {
                GraphError::InvalidInput(format!("edge {}->{} has no weight", e.from, e.to))
            })?;
            graph.lists[e.from].push(WeightedArc { to: e.to, weight });
        }
        Ok(graph)
    }

    /// Copy of this graph with every weight negated, for longest-path runs.
    pub fn negated(&self) -> Result<Self> {
        let mut lists = Vec::with_capacity(self.lists.len());
        for list in &self.lists {
            let mut negated = Vec::with_capacity(list.len());
            for arc in list {
                let weight = arc.weight.checked_neg().ok_or_else(|| GraphError::Overflow {
                    context: format!("negating weight of edge to {}", arc.to),
                })?;
                negated.push(WeightedArc { to: arc.to, weight });
            }
            lists.push(negated);
        }
        Ok(Self {
            vertex_count: self.vertex_count,
            indexing: self.indexing,
            lists,
        })
    }
}
