// src/algo/floyd_warshall.rs

use tracing::{debug, info, warn};

use crate::errors::{GraphError, Result};
use crate::graph::{Distance, DistanceMatrix, EdgeList, Indexing};

/// All-pairs shortest paths over a 0-based weighted edge list.
///
/// The matrix starts with a zero diagonal and `Unreachable` elsewhere. Each
/// edge record sets its cell, so for duplicate pairs the last record wins;
/// a self-loop can only lower its diagonal cell below zero.
///
/// Then for every intermediate `k` and pair `(i, j)`:
/// `d[i][j] = d[i][k] + d[k][j]` when both legs are finite and the sum is
/// strictly smaller.
pub fn floyd_warshall(edges: &EdgeList) -> Result<DistanceMatrix> {
    if edges.indexing != Indexing::ZeroBased {
        return Err(GraphError::InvalidInput(
            "all-pairs shortest paths expects 0-based vertex ids".to_string(),
        ));
    }

    let n = edges.vertex_count;
    let mut dp = DistanceMatrix::new(n)?;

    for e in &edges.edges {
        let weight = e.weight.ok_or_else(|| {
            GraphError::InvalidInput(format!("edge {}->{} has no weight", e.from, e.to))
        })?;
        let candidate = Distance::Finite(weight);
        if e.from == e.to {
            if candidate < dp.get(e.from, e.to) {
                dp.set(e.from, e.to, candidate);
            }
        } else {
            dp.set(e.from, e.to, candidate);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(via_k) = dp.get(i, k).finite() else {
                continue;
            };
            for j in 0..n {
                let Some(from_k) = dp.get(k, j).finite() else {
                    continue;
                };
                let sum = via_k.checked_add(from_k).ok_or_else(|| GraphError::Overflow {
                    context: format!("routing {i}->{j} through {k}"),
                })?;
                let candidate = Distance::Finite(sum);
                if candidate < dp.get(i, j) {
                    dp.set(i, j, candidate);
                }
            }
        }
        debug!(k, "floyd-warshall: finished intermediate vertex");
    }

    let negative = dp.negative_cycle_vertices();
    if !negative.is_empty() {
        warn!(
            vertices = ?negative,
            "negative cycle detected; distances through it are not meaningful"
        );
    }
    info!(vertices = n, edges = edges.edges.len(), "floyd-warshall complete");

    Ok(dp)
}
