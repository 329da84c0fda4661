// src/types.rs

use clap::ValueEnum;
use serde::Deserialize;

/// Order in which the DAG shortest-path run relaxes edges.
///
/// - `Topological`: relax vertices in a Kahn order computed first. Correct
///   for every DAG, negative weights included (default).
/// - `Queue`: the legacy sweep. Vertices are relaxed in the order a BFS-like
///   queue reaches them from the source, which can finalize a vertex before
///   all of its predecessors have been relaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Relaxation {
    #[default]
    Topological,
    Queue,
}

/// Whether the DAG run looks for shortest or longest paths.
///
/// Longest paths are computed as shortest paths over negated weights, with
/// the finite results negated back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    #[default]
    Shortest,
    Longest,
}
