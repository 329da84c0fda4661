// src/config/mod.rs

//! Configuration loading and validation for graphwalk.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate invariants such as a distinguishable infinity label (`validate.rs`).
//! - Flatten the validated file into per-run [`Settings`] (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, DagSection, FloydWarshallSection, OutputSection, RawConfigFile};
pub use settings::Settings;
