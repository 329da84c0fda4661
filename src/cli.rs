// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::Relaxation;

/// Command-line arguments for `graphwalk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Read a graph from stdin, run one classic graph algorithm, print the result.",
    long_about = None
)]
pub struct CliArgs {
    /// Optional config file (TOML). Built-in defaults are used otherwise.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRAPHWALK_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Do not print input prompts; stdout then only carries results.
    #[arg(long, short = 'q', global = true)]
    pub no_prompts: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per algorithm.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Breadth-first traversal of an undirected graph (`n m`, then `u v` edges).
    Bfs,

    /// Depth-first traversal of an undirected graph, followed by its adjacency list.
    Dfs {
        /// Skip the `u->v` adjacency listing after the traversal.
        #[arg(long)]
        no_edges: bool,
    },

    /// Topological order of a directed graph (Kahn's algorithm).
    Toposort,

    /// Single-source distances on a weighted DAG (`n m`, then `u v w` edges).
    DagShortestPath {
        /// Source vertex. Default: `[dag].source` or 1.
        #[arg(long, value_name = "VERTEX")]
        source: Option<usize>,

        /// Edge relaxation order.
        #[arg(long, value_enum, value_name = "ORDER")]
        relaxation: Option<Relaxation>,

        /// Compute longest instead of shortest paths.
        #[arg(long)]
        longest: bool,
    },

    /// All-pairs distances (`n m`, `u v w` edges with 0-based ids, then an
    /// optional query pair `x y`).
    FloydWarshall {
        /// Print the full distance matrix even when a query pair is given.
        #[arg(long)]
        matrix: bool,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Bfs => "bfs",
            Command::Dfs { .. } => "dfs",
            Command::Toposort => "toposort",
            Command::DagShortestPath { .. } => "dag-shortest-path",
            Command::FloydWarshall { .. } => "floyd-warshall",
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse arguments from a concrete iterator; used by tests.
pub fn parse_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::parse_from(args)
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
