//! Policies that shape how a status report is assembled.

use serde::Deserialize;

/// What to do when a timing artifact the report depends on is missing.
///
/// The lock file should exist whenever the daemon is running and the
/// progress file once it has run at least once. Right after startup
/// neither may have been written yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingArtifactPolicy {
    /// Fail the whole report.
    #[default]
    Strict,
    /// Note the absence in the report and carry on.
    Degrade,
}
