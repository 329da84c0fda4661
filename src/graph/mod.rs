// src/graph/mod.rs

//! In-memory graph model shared by every algorithm.
//!
//! - [`adjacency`] holds the adjacency-list graph and the edge list it is
//!   built from.
//! - [`distance`] defines [`Distance`], the guarded "finite or unreachable"
//!   value used by the shortest-path algorithms.

pub mod adjacency;
pub mod distance;

pub use adjacency::{
    Edge, EdgeList, Graph, HasTarget, Indexing, UnweightedGraph, WeightedArc, WeightedGraph,
};
pub use distance::{Distance, DistanceMatrix};

/// Vertex identifier. Whether ids start at 0 or 1 is carried by [`Indexing`].
pub type Vertex = usize;
