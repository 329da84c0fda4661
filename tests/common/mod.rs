#![allow(dead_code)]

use std::collections::BTreeMap;

use graphwalk::graph::{EdgeList, Indexing};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

/// Undirected or directed edges over `1..=n`, self-loops allowed.
pub fn one_based_edges(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices).prop_flat_map(|n| {
        let edges = proptest::collection::vec((1..=n, 1..=n), 0..(n * 3));
        (Just(n), edges)
    })
}

/// Random DAG over `1..=n`: edges only go forward in a shuffled vertex order.
pub fn one_based_dag(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices).prop_flat_map(|n| {
        let perm = Just((1..=n).collect::<Vec<usize>>()).prop_shuffle();
        let pairs = proptest::collection::vec((0..n, 0..n), 0..(n * 3));
        (Just(n), perm, pairs).prop_map(|(n, perm, pairs)| {
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a < b)
                .map(|(a, b)| (perm[a], perm[b]))
                .collect();
            (n, edges)
        })
    })
}

/// Random weighted DAG over `1..=n` with non-negative weights.
pub fn one_based_weighted_dag(
    max_vertices: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    one_based_dag(max_vertices).prop_flat_map(|(n, edges)| {
        let weights = proptest::collection::vec(0i64..50, edges.len());
        (Just(n), Just(edges), weights).prop_map(|(n, edges, weights)| {
            let weighted = edges
                .into_iter()
                .zip(weights)
                .map(|((u, v), w)| (u, v, w))
                .collect();
            (n, weighted)
        })
    })
}

/// Directed graph over `0..n` with non-negative weights and at most one
/// edge per ordered pair, no self-loops.
pub fn zero_based_weighted(
    max_vertices: usize,
) -> impl Strategy<Value = (usize, BTreeMap<(usize, usize), i64>)> {
    (1..=max_vertices).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 0i64..50), 0..(n * 3));
        (Just(n), edges).prop_map(|(n, edges)| {
            let map = edges
                .into_iter()
                .filter(|(u, v, _)| u != v)
                .map(|(u, v, w)| ((u, v), w))
                .collect();
            (n, map)
        })
    })
}

pub fn edge_list(n: usize, indexing: Indexing, edges: &[(usize, usize)]) -> EdgeList {
    let mut list = EdgeList::new(n, indexing);
    for &(u, v) in edges {
        list.push(u, v, None).unwrap();
    }
    list
}

pub fn weighted_edge_list(n: usize, indexing: Indexing, edges: &[(usize, usize, i64)]) -> EdgeList {
    let mut list = EdgeList::new(n, indexing);
    for &(u, v, w) in edges {
        list.push(u, v, Some(w)).unwrap();
    }
    list
}

/// petgraph mirror of a weighted edge list; node `i` is vertex `i + offset`.
pub fn petgraph_of(n: usize, offset: usize, edges: &[(usize, usize, i64)]) -> DiGraph<(), i64> {
    let mut g = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v, w) in edges {
        g.add_edge(NodeIndex::new(u - offset), NodeIndex::new(v - offset), w);
    }
    g
}
