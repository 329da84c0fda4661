// src/algo/dag_shortest_path.rs

//! Single-source shortest (or longest) paths on a weighted DAG.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::algo::toposort::topological_sort;
use crate::errors::{GraphError, Result};
use crate::graph::{Distance, Vertex, WeightedGraph};
use crate::types::{Objective, Relaxation};

/// Distances from one source to every vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: Vertex,
    pub objective: Objective,
    pub relaxation: Relaxation,
    first: Vertex,
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Distance to `v`; `Unreachable` for ids outside the graph.
    pub fn distance(&self, v: Vertex) -> Distance {
        self.distances
            .get(v)
            .filter(|_| v >= self.first)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// `(vertex, distance)` for every vertex in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .skip(self.first)
            .map(|(v, d)| (v, *d))
    }

    pub fn distances(&self) -> Vec<Distance> {
        self.iter().map(|(_, d)| d).collect()
    }
}

/// Compute distances from `source`.
///
/// With [`Objective::Longest`] every weight is negated, the shortest-path
/// run is performed, and finite results are negated back.
pub fn dag_shortest_paths(
    graph: &WeightedGraph,
    source: Vertex,
    relaxation: Relaxation,
    objective: Objective,
) -> Result<ShortestPaths> {
    let source = graph.check_vertex(source)?;

    let distances = match objective {
        Objective::Shortest => relax(graph, source, relaxation)?,
        Objective::Longest => {
            let negated = graph.negated()?;
            relax(&negated, source, relaxation)?
                .into_iter()
                .map(Distance::negate)
                .collect::<Result<Vec<_>>>()?
        }
    };

    let reachable = distances.iter().filter(|d| d.is_finite()).count();
    info!(source, ?objective, ?relaxation, reachable, "dag shortest path complete");

    Ok(ShortestPaths {
        source,
        objective,
        relaxation,
        first: graph.indexing().first(),
        distances,
    })
}

fn relax(graph: &WeightedGraph, source: Vertex, relaxation: Relaxation) -> Result<Vec<Distance>> {
    let mut dist = vec![Distance::Unreachable; graph.slots()];
    dist[source] = Distance::ZERO;

    match relaxation {
        Relaxation::Topological => relax_in_topological_order(graph, &mut dist)?,
        Relaxation::Queue => {
            warn!("queue relaxation is not guaranteed to be correct for every DAG shape");
            relax_in_queue_order(graph, source, &mut dist)?;
        }
    }
    Ok(dist)
}

/// Relax every vertex's outgoing edges in topological order. Each vertex
/// is final by the time it is reached, since all predecessors come first.
fn relax_in_topological_order(graph: &WeightedGraph, dist: &mut [Distance]) -> Result<()> {
    let topo = topological_sort(graph);
    if !topo.is_complete() {
        return Err(GraphError::NotAcyclic {
            remaining: topo.omitted,
        });
    }

    for node in topo.order {
        let base = dist[node];
        if !base.is_finite() {
            continue;
        }
        for arc in graph.neighbors(node) {
            let candidate = base.extend(arc.weight)?;
            if candidate < dist[arc.to] {
                debug!(from = node, to = arc.to, %candidate, "relaxed edge");
                dist[arc.to] = candidate;
            }
        }
    }
    Ok(())
}

/// Legacy sweep: dequeue, mark visited, relax every outgoing edge and
/// enqueue neighbors that were not yet visited.
fn relax_in_queue_order(
    graph: &WeightedGraph,
    source: Vertex,
    dist: &mut [Distance],
) -> Result<()> {
    let mut visited = vec![false; graph.slots()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        visited[node] = true;
        let base = dist[node];

        for arc in graph.neighbors(node) {
            if !visited[arc.to] {
                queue.push_back(arc.to);
            }
            let candidate = base.extend(arc.weight)?;
            if candidate < dist[arc.to] {
                debug!(from = node, to = arc.to, %candidate, "relaxed edge");
                dist[arc.to] = candidate;
            }
        }
    }
    Ok(())
}
