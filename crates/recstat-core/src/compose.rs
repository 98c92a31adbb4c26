//! Assembly of the full status report from the daemon's artifacts.

use crate::error::StatusError;
use crate::format::format_status;
use crate::liveness::is_running;
use crate::progress::{parse_progress, DebugCopyPolicy};
use crate::timing::{format_ctime, format_elapsed, TimingFact};
use crate::Result;
use chrono::{DateTime, Local};
use recstat_types::{MissingArtifactPolicy, RunState, StatusReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations of the artifacts inside a daemon working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonPaths {
    root: PathBuf,
}

impl DaemonPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// PID of the running daemon, empty if none was recorded.
    pub fn pid_file(&self) -> PathBuf {
        self.root.join("index.pid")
    }

    /// Index lock, touched when the current run started.
    pub fn lock_file(&self) -> PathBuf {
        self.root.join("xapiandb").join("flintlock")
    }

    pub fn progress_file(&self) -> PathBuf {
        self.root.join("idxstatus.txt")
    }

    /// Query history, touched on every query.
    pub fn history_file(&self) -> PathBuf {
        self.root.join("history")
    }
}

/// Knobs for [`StatusComposer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    pub debug_copies: DebugCopyPolicy,
    pub missing_artifacts: MissingArtifactPolicy,
}

/// Builds one status report snapshot for a daemon directory.
#[derive(Debug, Clone)]
pub struct StatusComposer {
    paths: DaemonPaths,
    options: ComposeOptions,
}

impl StatusComposer {
    pub fn new(daemon_dir: impl Into<PathBuf>) -> Self {
        Self::with_options(daemon_dir, ComposeOptions::default())
    }

    pub fn with_options(daemon_dir: impl Into<PathBuf>, options: ComposeOptions) -> Self {
        Self {
            paths: DaemonPaths::new(daemon_dir),
            options,
        }
    }

    /// Compose the report as of now and render it.
    pub fn compose(&self) -> Result<String> {
        Ok(self.report_at(Local::now())?.render())
    }

    /// Compose the report with `now` as the reference instant.
    pub fn report_at(&self, now: DateTime<Local>) -> Result<StatusReport> {
        let state = RunState::from_alive(is_running(&self.paths.pid_file())?);
        info!(target: "recstat::report", "Daemon in {} is {:?}", self.paths.root().display(), state);

        let mut report = StatusReport::new();
        match state {
            RunState::Running => self.running_section(&mut report, now)?,
            RunState::Stopped => self.stopped_section(&mut report, now)?,
        }
        self.query_section(&mut report, now);

        Ok(report)
    }

    fn running_section(&self, report: &mut StatusReport, now: DateTime<Local>) -> Result<()> {
        report.push("daemon is running");

        let lock = self.paths.lock_file();
        match TimingFact::from_required_file(&lock, now)?.elapsed() {
            Some(elapsed) => {
                report.push(format!(" daemon has been running for {}", format_elapsed(elapsed)))
            }
            None => {
                self.tolerate_missing(&lock)?;
                report.push(" daemon start time unknown (no lock file yet)");
            }
        }

        let progress = self.paths.progress_file();
        let degrade = self.options.missing_artifacts == MissingArtifactPolicy::Degrade;
        if degrade && matches!(progress.try_exists(), Ok(false)) {
            report.push("No progress recorded yet.");
            return Ok(());
        }
        self.progress_section(report, &progress)
    }

    fn stopped_section(&self, report: &mut StatusReport, now: DateTime<Local>) -> Result<()> {
        report.push("daemon is not running");

        let progress = self.paths.progress_file();
        let fact = TimingFact::from_required_file(&progress, now)?;
        let (Some(started), Some(elapsed)) = (fact.reference, fact.elapsed()) else {
            self.tolerate_missing(&progress)?;
            report.push(" daemon has not run yet (no progress file)");
            return Ok(());
        };

        report.push(format!(" daemon was last started on {}", format_ctime(&started)));
        report.push(format!(
            " time since daemon last started: {}",
            format_elapsed(elapsed)
        ));
        self.progress_section(report, &progress)
    }

    fn progress_section(&self, report: &mut StatusReport, progress: &Path) -> Result<()> {
        let status = parse_progress(progress, &self.options.debug_copies)?;
        report.push_block(&format_status(&status)?);
        Ok(())
    }

    fn query_section(&self, report: &mut StatusReport, now: DateTime<Local>) {
        let fact = TimingFact::from_file(&self.paths.history_file(), now);
        let (Some(queried), Some(elapsed)) = (fact.reference, fact.elapsed()) else {
            debug!(target: "recstat::report", "No query history");
            return;
        };
        report.push(format!("index last queried on: {}", format_ctime(&queried)));
        report.push(format!(" which was {} ago.", format_elapsed(elapsed)));
    }

    /// Under the strict policy a missing timing artifact is fatal.
    fn tolerate_missing(&self, path: &Path) -> Result<()> {
        match self.options.missing_artifacts {
            MissingArtifactPolicy::Strict => Err(StatusError::NotFound {
                path: path.to_path_buf(),
            }),
            MissingArtifactPolicy::Degrade => {
                debug!(target: "recstat::report", "Tolerating missing {}", path.display());
                Ok(())
            }
        }
    }
}
