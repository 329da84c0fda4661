// src/algo/mod.rs

//! Graph algorithms.
//!
//! - [`bfs`] and [`dfs`] visit every vertex of an undirected graph, one
//!   traversal per connected component.
//! - [`toposort`] orders a directed graph with Kahn's algorithm.
//! - [`dag_shortest_path`] computes single-source distances on a weighted DAG.
//! - [`floyd_warshall`] computes all-pairs distances.

pub mod bfs;
pub mod dag_shortest_path;
pub mod dfs;
pub mod floyd_warshall;
pub mod toposort;
pub mod traversal;

pub use bfs::bfs;
pub use dag_shortest_path::{dag_shortest_paths, ShortestPaths};
pub use dfs::dfs;
pub use floyd_warshall::floyd_warshall;
pub use toposort::{indegrees, topological_sort, TopoOrder};
pub use traversal::Traversal;
