//! recstat - report the status of a background indexing daemon.

use anyhow::{bail, Context, Result};
use clap::Parser;
use recstat_cli::config::Config;
use recstat_cli::helper::{find_executable, readable_directory};
use recstat_cli::logging::{self, LogConfig, LogFormat};
use recstat_core::StatusComposer;
use recstat_types::MissingArtifactPolicy;
use std::path::PathBuf;

/// Display the status of the indexing daemon.
#[derive(Parser, Debug)]
#[command(name = "recstat")]
#[command(about = "Display status of the indexing daemon from its on-disk artifacts")]
#[command(version)]
struct Cli {
    /// Daemon working directory [default: ~/.recoll]
    #[arg(short = 'd', long = "recoll-dir", value_name = "DIR", value_parser = readable_directory)]
    recoll_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Never keep copies of unparseable progress files
    #[arg(long)]
    no_debug_copies: bool,

    /// Directory for copies of unparseable progress files
    #[arg(long, value_name = "DIR")]
    debug_copy_dir: Option<PathBuf>,

    /// Report missing lock or progress files instead of failing
    #[arg(long)]
    degrade: bool,

    /// Enable verbose logging (INFO level)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging (DEBUG level)
    #[arg(long)]
    debug: bool,

    /// Enable trace logging (TRACE level)
    #[arg(long)]
    trace: bool,

    /// Quiet mode (ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "pid=debug").
    /// Can be specified multiple times. Targets are prefixed with "recstat::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.recoll_dir {
            config.recoll_dir = dir.clone();
        }
        if self.no_debug_copies {
            config.debug_copies = false;
        }
        if let Some(dir) = &self.debug_copy_dir {
            config.debug_copy_dir = Some(dir.clone());
        }
        if self.degrade {
            config.missing_artifacts = MissingArtifactPolicy::Degrade;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides.clone(),
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);

    // Directories given on the command line were checked by clap already.
    if cli.recoll_dir.is_none() {
        if let Err(e) = readable_directory(&config.recoll_dir.to_string_lossy()) {
            bail!(e);
        }
    }

    tracing::debug!(target: "recstat::startup", "Using daemon directory {}", config.recoll_dir.display());

    if find_executable(&config.helper_executable).is_none() {
        tracing::warn!(
            target: "recstat::startup",
            "Could not find '{}' executable. Is it installed?",
            config.helper_executable
        );
    }

    let composer = StatusComposer::with_options(&config.recoll_dir, config.compose_options());
    let report = composer
        .compose()
        .with_context(|| format!("Cannot report status of {}", config.recoll_dir.display()))?;

    println!("{report}");
    Ok(())
}
