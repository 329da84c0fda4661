// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::graph::Vertex;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    #[error("Vertex {vertex} out of range (expected {min}..={max})")]
    VertexOutOfRange { vertex: i64, min: i64, max: i64 },

    #[error("Graph is not acyclic: {} vertices lie on or behind a cycle", .remaining.len())]
    NotAcyclic { remaining: Vec<Vertex> },

    #[error("Distance overflow while {context}")]
    Overflow { context: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GraphError {
    /// True for every error caused by the graph read from stdin, as opposed
    /// to configuration or IO problems.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidInput(_)
                | GraphError::UnexpectedEof { .. }
                | GraphError::VertexOutOfRange { .. }
                | GraphError::NotAcyclic { .. }
                | GraphError::Overflow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
