// src/algo/toposort.rs

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::graph::{Graph, HasTarget, Vertex};

/// Result of Kahn's algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder {
    /// Vertices whose indegree reached zero, in emission order.
    pub order: Vec<Vertex>,
    /// Vertices never emitted because they lie on or behind a cycle,
    /// in increasing id order. Empty for acyclic input.
    pub omitted: Vec<Vertex>,
}

impl TopoOrder {
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }
}

/// Incoming edge count per vertex slot.
pub fn indegrees<E: HasTarget>(graph: &Graph<E>) -> Vec<usize> {
    let mut indegree = vec![0usize; graph.slots()];
    for v in graph.vertices() {
        for arc in graph.neighbors(v) {
            indegree[arc.target()] += 1;
        }
    }
    indegree
}

/// Kahn's algorithm.
///
/// The queue is seeded with zero-indegree vertices in increasing id order
/// and processed FIFO. No cycle check is performed up front: vertices that
/// never reach indegree zero are reported in [`TopoOrder::omitted`].
pub fn topological_sort<E: HasTarget>(graph: &Graph<E>) -> TopoOrder {
    let mut indegree = indegrees(graph);
    let mut queue: VecDeque<Vertex> = graph.vertices().filter(|&v| indegree[v] == 0).collect();
    debug!(seeds = queue.len(), "toposort: seeded queue with sources");

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(node) = queue.pop_front() {
        order.push(node);

        for arc in graph.neighbors(node) {
            let next = arc.target();
            // Each edge decrements its target exactly once, so this never
            // drops below zero.
            debug_assert!(indegree[next] > 0);
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    let omitted: Vec<Vertex> = graph.vertices().filter(|&v| indegree[v] > 0).collect();
    if omitted.is_empty() {
        info!(vertices = order.len(), "toposort complete");
    } else {
        warn!(
            emitted = order.len(),
            omitted = omitted.len(),
            "graph has a cycle; vertices on or behind it were left out"
        );
    }

    TopoOrder { order, omitted }
}
