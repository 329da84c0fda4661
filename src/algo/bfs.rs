// src/algo/bfs.rs

//! Breadth-first traversal.
//!
//! Vertices are marked visited when they are enqueued, so each one enters
//! the queue at most once and is printed in the order it is dequeued.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::algo::traversal::Traversal;
use crate::graph::{UnweightedGraph, Vertex};

/// Visit every vertex, starting a new level-order traversal from each
/// unvisited vertex in increasing id order.
pub fn bfs(graph: &UnweightedGraph) -> Traversal {
    let mut visited = vec![false; graph.slots()];
    let mut traversal = Traversal::with_slots(graph.slots());

    for root in graph.vertices() {
        if !visited[root] {
            traversal.roots.push(root);
            bfs_from(graph, root, &mut visited, &mut traversal);
        }
    }

    info!(
        visited = traversal.order.len(),
        components = traversal.component_count(),
        "bfs complete"
    );
    traversal
}

fn bfs_from(graph: &UnweightedGraph, root: Vertex, visited: &mut [bool], out: &mut Traversal) {
    debug!(root, "bfs: starting traversal");

    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back((root, 0usize));

    while let Some((node, depth)) = queue.pop_front() {
        out.visit(node, depth);

        for &next in graph.neighbors(node) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back((next, depth + 1));
            }
        }
    }
}
