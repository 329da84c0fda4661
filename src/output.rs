// src/output.rs

//! Rendering of prompts and results to stdout.

use std::fmt::Display;
use std::io::Write;

use crate::config::Settings;
use crate::errors::Result;
use crate::graph::{Distance, DistanceMatrix, UnweightedGraph};

pub const PROMPT_COUNTS: &str = "Enter the number of vertices and edges:";
pub const PROMPT_EDGES: &str = "Enter the edges (u v):";
pub const PROMPT_WEIGHTED_EDGES: &str = "Enter the edges and their weights (u v w):";
pub const PROMPT_QUERY: &str = "Enter the 2 nodes between which you want the shortest distance:";

/// Line-oriented writer that knows the run's output settings.
pub struct Printer<'a, W> {
    out: W,
    settings: &'a Settings,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: W, settings: &'a Settings) -> Self {
        Self { out, settings }
    }

    /// Print a prompt if prompts are enabled, flushing so it is visible
    /// before the next read blocks.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.settings.prompts {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Values on one line joined by the configured separator.
    pub fn values<T: Display>(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        let line = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(&self.settings.separator);
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// One value per line.
    pub fn column<T: Display>(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        for v in values {
            writeln!(self.out, "{v}")?;
        }
        Ok(())
    }

    pub fn distances(&mut self, distances: impl IntoIterator<Item = Distance>) -> Result<()> {
        let settings: &'a Settings = self.settings;
        let infinity = settings.infinity.as_str();
        self.values(
            distances
                .into_iter()
                .map(|d| d.display_with(infinity).to_string()),
        )
    }

    /// `u->v` pairs of every vertex's adjacency list, one line per vertex.
    pub fn adjacency(&mut self, graph: &UnweightedGraph) -> Result<()> {
        for u in graph.vertices() {
            self.values(graph.neighbors(u).iter().map(|v| format!("{u}->{v}")))?;
        }
        Ok(())
    }

    pub fn answer(&mut self, distance: Distance) -> Result<()> {
        writeln!(
            self.out,
            "Answer: {}",
            distance.display_with(&self.settings.infinity)
        )?;
        Ok(())
    }

    pub fn matrix(&mut self, matrix: &DistanceMatrix) -> Result<()> {
        for row in matrix.rows() {
            self.distances(row.iter().copied())?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
