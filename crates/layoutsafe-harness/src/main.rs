//! LayoutSafe compliance harness entry point.
//!
//! Loads the run configuration and the common charset, drives the two-phase
//! compliance run, prints the report, and maps the terminal state to the
//! process exit code:
//!
//! | Verdict              | Exit code |
//! |----------------------|-----------|
//! | `AllPass`            | 0         |
//! | `Phase2FailuresFound`| 1         |
//! | `Phase1Bug`          | 2         |
//!
//! A distinct code for the phase-1 bug matters: it means the validator or
//! charset contract itself is broken, not that a test subject failed.
//!
//! Usage: `layoutsafe-harness [config.toml]`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use layoutsafe_core::charset::store::{load_builtin, load_from_path};
use layoutsafe_harness::application::run_compliance::{run, Verdict};
use layoutsafe_harness::infrastructure::config::load_config;
use layoutsafe_harness::infrastructure::report::{print_charset_summary, print_report};

fn main() -> anyhow::Result<ExitCode> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())
        .context("failed to load harness configuration")?;

    // The charset load is the one fatal precondition: without it there is no
    // safety guarantee to check.
    let charset = match &config.charset_path {
        Some(path) => load_from_path(path),
        None => load_builtin(),
    }
    .context("failed to load common charset")?;

    info!(
        lowercase = charset.lowercase().len(),
        uppercase = charset.uppercase().len(),
        special = charset.special().len(),
        seed = config.seed,
        "compliance run starting"
    );
    print_charset_summary(&charset);

    let report = run(&charset, &config);
    print_report(&report, &config);

    Ok(match report.verdict() {
        Verdict::AllPass => ExitCode::SUCCESS,
        Verdict::Phase2FailuresFound => ExitCode::from(1),
        Verdict::Phase1Bug => ExitCode::from(2),
    })
}
