//! Status reporting for a background indexing daemon.
//!
//! All facts come from files the daemon leaves in its working directory:
//! the PID file, the index lock file, the progress file and the query
//! history. Each report is a single snapshot of those files.

mod compose;
mod error;
mod format;
mod liveness;
mod progress;
mod timing;

pub use compose::{ComposeOptions, DaemonPaths, StatusComposer};
pub use error::StatusError;
pub use format::{format_status, FIELD_DESCRIPTIONS};
pub use liveness::{is_running, read_pid};
pub use progress::{parse_progress, parse_progress_str, DebugCopyPolicy};
pub use timing::{format_ctime, format_elapsed, last_modified, required_modified, TimingFact};

/// Result type for recstat operations.
pub type Result<T> = std::result::Result<T, StatusError>;
