// src/algo/dfs.rs

use tracing::{debug, info};

use crate::algo::traversal::Traversal;
use crate::graph::{UnweightedGraph, Vertex};

/// One suspended visit: the vertex and the index of the next neighbor to try.
struct Frame {
    vertex: Vertex,
    next: usize,
}

/// Depth-first traversal of every vertex, one traversal per unvisited vertex
/// in increasing id order.
///
/// Uses an explicit stack of frames instead of recursion. The visitation
/// order is identical to the recursive formulation: a vertex is marked and
/// recorded on entry, then its neighbors are tried in adjacency order.
pub fn dfs(graph: &UnweightedGraph) -> Traversal {
    let mut visited = vec![false; graph.slots()];
    let mut traversal = Traversal::with_slots(graph.slots());
    let mut stack: Vec<Frame> = Vec::new();
    let mut max_depth = 0;

    for root in graph.vertices() {
        if visited[root] {
            continue;
        }
        debug!(root, "dfs: starting traversal");
        traversal.roots.push(root);

        visited[root] = true;
        traversal.visit(root, 0);
        stack.push(Frame { vertex: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let neighbors = graph.neighbors(frame.vertex);
            if frame.next >= neighbors.len() {
                stack.pop();
                continue;
            }

            let candidate = neighbors[frame.next];
            frame.next += 1;

            if !visited[candidate] {
                visited[candidate] = true;
                let depth = stack.len();
                traversal.visit(candidate, depth);
                max_depth = max_depth.max(depth);
                stack.push(Frame {
                    vertex: candidate,
                    next: 0,
                });
            }
        }
    }

    info!(
        visited = traversal.order.len(),
        components = traversal.component_count(),
        max_depth,
        "dfs complete"
    );
    traversal
}
