// src/config/model.rs

use serde::Deserialize;

use crate::types::{Objective, Relaxation};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [output]
/// prompts = false
/// infinity = "inf"
///
/// [dag]
/// source = 1
/// relaxation = "topological"
/// objective = "longest"
///
/// [floyd_warshall]
/// print_matrix = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub dag: DagSection,

    #[serde(default)]
    pub floyd_warshall: FloydWarshallSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// or [`Default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub dag: DagSection,
    pub floyd_warshall: FloydWarshallSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        output: OutputSection,
        dag: DagSection,
        floyd_warshall: FloydWarshallSection,
    ) -> Self {
        Self {
            output,
            dag,
            floyd_warshall,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Print a human-readable prompt before each group of input.
    #[serde(default = "default_prompts")]
    pub prompts: bool,

    /// Label printed for unreachable distances.
    ///
    /// Must not itself look like a number, or it could be mistaken for a
    /// finite distance.
    #[serde(default = "default_infinity")]
    pub infinity: String,

    /// Placed between values on one result line.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_prompts() -> bool {
    true
}

fn default_infinity() -> String {
    "INF".to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            prompts: default_prompts(),
            infinity: default_infinity(),
            separator: default_separator(),
        }
    }
}

/// `[dag]` section for `dag-shortest-path`.
#[derive(Debug, Clone, Deserialize)]
pub struct DagSection {
    /// Source vertex (1-based).
    #[serde(default = "default_source")]
    pub source: usize,

    #[serde(default)]
    pub relaxation: Relaxation,

    #[serde(default)]
    pub objective: Objective,
}

fn default_source() -> usize {
    1
}

impl Default for DagSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            relaxation: Relaxation::default(),
            objective: Objective::default(),
        }
    }
}

/// `[floyd_warshall]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FloydWarshallSection {
    /// Print the whole distance matrix even when a query pair was given.
    #[serde(default)]
    pub print_matrix: bool,
}
