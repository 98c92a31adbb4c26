//! Parser for the daemon's `idxstatus.txt` progress file.
//!
//! The file holds one `key = value` assignment per logical line. A
//! backslash at the end of a physical line continues it onto the next.
//! Snapshots that fail to parse, or that report a phase we have no
//! samples of, are copied aside for later inspection.

use crate::error::StatusError;
use crate::Result;
use recstat_types::ProgressStatus;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix of the diagnostic copies written by [`parse_progress`].
const DEBUG_COPY_PREFIX: &str = "idxstatus";

/// Where diagnostic copies of odd progress files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DebugCopyPolicy {
    /// Never write copies.
    Disabled,
    /// Uniquely named file in the system temp directory.
    ///
    /// Nothing cleans these up. A daemon sitting in the monitor phase leaves
    /// one more copy per report, so long-lived setups polling recstat should
    /// use `Disabled` (`--no-debug-copies`) or a dedicated `Directory`.
    #[default]
    SystemTemp,
    /// Uniquely named file in the given directory.
    Directory(PathBuf),
}

/// Parse the progress file at `path`.
///
/// Fails on the first logical line that is not a `key = value` pair, or
/// when no `phase` is recorded. Bytes that are not UTF-8 (the daemon
/// writes `fn` as a raw filesystem path) are decoded lossily.
pub fn parse_progress(path: &Path, debug_copies: &DebugCopyPolicy) -> Result<ProgressStatus> {
    let raw = std::fs::read(path).map_err(|e| StatusError::from_io(e, path))?;
    let mut copied = false;

    let text = match std::str::from_utf8(&raw) {
        Ok(text) => std::borrow::Cow::Borrowed(text),
        Err(e) => {
            warn!(target: "recstat::progress", "{} is not valid UTF-8: {}", path.display(), e);
            keep_debug_copy(&raw, path, debug_copies);
            copied = true;
            String::from_utf8_lossy(&raw)
        }
    };

    let status = match parse_progress_str(&text) {
        Ok(status) => status,
        Err(e) => {
            warn!(target: "recstat::progress", "{}: {}", path.display(), e);
            if !copied {
                keep_debug_copy(&raw, path, debug_copies);
            }
            return Err(e);
        }
    };

    if !copied && status.phase().is_some_and(|p| !p.is_characterized()) {
        debug!(
            target: "recstat::progress",
            "Phase {:?} has no known samples yet",
            status.phase_code()
        );
        keep_debug_copy(&raw, path, debug_copies);
    }

    Ok(status)
}

/// Parse progress-file text without touching the filesystem.
pub fn parse_progress_str(text: &str) -> Result<ProgressStatus> {
    let joined = text.replace("\\\r\n", "").replace("\\\n", "");
    let mut status = ProgressStatus::new();

    for (index, line) in joined.lines().enumerate() {
        let Some((key, value)) = line.split_once('=') else {
            return Err(StatusError::Parse {
                line_number: index + 1,
                line: line.to_string(),
            });
        };
        status.insert(key.trim(), value.trim());
    }

    if status.phase_code().is_none() {
        return Err(StatusError::MissingField { field: "phase" });
    }

    Ok(status)
}

/// Best-effort copy of `raw` to a fresh file. Never fails the caller.
fn keep_debug_copy(raw: &[u8], source: &Path, policy: &DebugCopyPolicy) -> Option<PathBuf> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(DEBUG_COPY_PREFIX).suffix(".txt");

    let created = match policy {
        DebugCopyPolicy::Disabled => return None,
        DebugCopyPolicy::SystemTemp => builder.tempfile(),
        DebugCopyPolicy::Directory(dir) => builder.tempfile_in(dir),
    };

    let kept = created.and_then(|mut file| {
        file.write_all(raw)?;
        file.keep().map(|(_, path)| path).map_err(|e| e.error)
    });

    match kept {
        Ok(path) => {
            info!(
                target: "recstat::progress",
                "Copied {} to {}",
                source.display(),
                path.display()
            );
            Some(path)
        }
        Err(e) => {
            warn!(
                target: "recstat::progress",
                "Could not keep a copy of {}: {}",
                source.display(),
                e
            );
            None
        }
    }
}
