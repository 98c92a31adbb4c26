//! Daemon liveness from its PID file.

use crate::error::{read_required, StatusError};
use crate::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Read the process ID recorded in `pid_path`.
///
/// An empty file means no process was ever recorded and yields `None`.
pub fn read_pid(pid_path: &Path) -> Result<Option<i32>> {
    let content = read_required(pid_path)?;
    let trimmed = content.trim();
    if content.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<i32>() {
        Ok(pid) if pid > 0 => Ok(Some(pid)),
        _ => Err(StatusError::MalformedPid {
            path: pid_path.to_path_buf(),
            content,
        }),
    }
}

/// Whether the process recorded in `pid_path` is currently alive.
///
/// A PID whose process no longer exists is a stale file, not an error.
pub fn is_running(pid_path: &Path) -> Result<bool> {
    let Some(pid) = read_pid(pid_path)? else {
        debug!(target: "recstat::pid", "{} is empty, no process recorded", pid_path.display());
        return Ok(false);
    };

    if probe(pid)? {
        debug!(target: "recstat::pid", "Process {} is alive", pid);
        Ok(true)
    } else {
        warn!(
            target: "recstat::pid",
            "{} has process ID {}, but no process with that ID is running",
            pid_path.display(),
            pid
        );
        Ok(false)
    }
}

/// Send signal 0 to `pid`. `Ok(false)` only when no such process exists.
#[cfg(unix)]
fn probe(pid: i32) -> Result<bool> {
    // SAFETY: signal 0 performs the existence and permission checks only.
    let rc = unsafe { libc::kill(pid, 0) };
    if rc == 0 {
        return Ok(true);
    }

    let err = std::io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::ESRCH) {
        Ok(false)
    } else {
        Err(StatusError::ProbeFailed { pid, source: err })
    }
}

#[cfg(not(unix))]
fn probe(pid: i32) -> Result<bool> {
    Err(StatusError::ProbeFailed {
        pid,
        source: std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "process probing requires a unix platform",
        ),
    })
}
