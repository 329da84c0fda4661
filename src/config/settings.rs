// src/config/settings.rs

use crate::config::model::ConfigFile;
use crate::graph::Vertex;
use crate::types::{Objective, Relaxation};

/// Flattened per-run settings: the validated config file with CLI
/// overrides applied on top (see `crate::apply_overrides`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prompts: bool,
    pub infinity: String,
    pub separator: String,
    pub source: Vertex,
    pub relaxation: Relaxation,
    pub objective: Objective,
    pub print_matrix: bool,
    pub print_edges: bool,
}

impl Settings {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            prompts: cfg.output.prompts,
            infinity: cfg.output.infinity.clone(),
            separator: cfg.output.separator.clone(),
            source: cfg.dag.source,
            relaxation: cfg.dag.relaxation,
            objective: cfg.dag.objective,
            print_matrix: cfg.floyd_warshall.print_matrix,
            print_edges: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&ConfigFile::default())
    }
}
