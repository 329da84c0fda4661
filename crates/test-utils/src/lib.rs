pub mod builders;

use std::sync::Once;

use graphwalk::cli::Command;
use graphwalk::commands::execute;
use graphwalk::config::Settings;
use graphwalk::errors::Result;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Default settings with prompts switched off, so stdout holds results only.
pub fn quiet_settings() -> Settings {
    Settings {
        prompts: false,
        ..Settings::default()
    }
}

/// Run a command over in-memory input and return everything it printed.
pub fn run_to_string(command: &Command, settings: &Settings, input: &str) -> Result<String> {
    let mut out = Vec::new();
    execute(command, settings, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("command output is UTF-8"))
}
