// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GraphError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = GraphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(
            raw.output,
            raw.dag,
            raw.floyd_warshall,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_output(cfg)?;
    validate_dag(cfg)?;
    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    let infinity = cfg.output.infinity.trim();
    if infinity.is_empty() {
        return Err(GraphError::ConfigError(
            "[output].infinity must not be empty".to_string(),
        ));
    }
    if infinity.parse::<i64>().is_ok() {
        return Err(GraphError::ConfigError(format!(
            "[output].infinity must not be a number (got {:?})",
            cfg.output.infinity
        )));
    }
    if cfg.output.infinity.chars().any(char::is_whitespace) {
        return Err(GraphError::ConfigError(format!(
            "[output].infinity must not contain whitespace (got {:?})",
            cfg.output.infinity
        )));
    }

    if cfg.output.separator.is_empty() {
        return Err(GraphError::ConfigError(
            "[output].separator must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_dag(cfg: &RawConfigFile) -> Result<()> {
    if cfg.dag.source == 0 {
        return Err(GraphError::ConfigError(
            "[dag].source must be >= 1 (vertices are numbered from 1)".to_string(),
        ));
    }
    Ok(())
}
