// src/lib.rs

pub mod algo;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod output;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::config::Settings;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (optional TOML file)
/// - global CLI overrides
/// - the selected command over locked stdin/stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;
    let settings = apply_overrides(Settings::from_config(&cfg), &args);
    debug!(?settings, "resolved settings");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    commands::execute(&args.command, &settings, stdin, stdout)
        .with_context(|| format!("running {}", args.command.name()))
}

/// Apply global CLI flags on top of config-derived settings. Subcommand
/// flags are applied later by [`commands::execute`].
pub fn apply_overrides(mut settings: Settings, args: &CliArgs) -> Settings {
    if args.no_prompts {
        settings.prompts = false;
    }
    settings
}
