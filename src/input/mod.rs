// src/input/mod.rs

//! Reading graphs from whitespace-separated integer input.
//!
//! - [`tokens`] splits a `BufRead` into integer tokens lazily, one line at a
//!   time, so prompts can interleave with interactive input.
//! - [`reader`] knows the grammar: counts, edge records, query vertices.

pub mod reader;
pub mod tokens;

pub use reader::{EdgeFormat, GraphReader, Header};
pub use tokens::Tokens;
