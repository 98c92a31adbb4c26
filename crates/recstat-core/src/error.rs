//! Error types for recstat.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Not a valid process ID in {}: {content:?}", .path.display())]
    MalformedPid { path: PathBuf, content: String },

    #[error("Cannot parse line {line_number}: {line:?}")]
    Parse { line_number: usize, line: String },

    #[error("Progress file has no '{field}' field")]
    MissingField { field: &'static str },

    #[error("Unknown indexing phase: {0:?}")]
    UnknownPhase(String),

    #[error("Liveness probe for process {pid} failed: {source}")]
    ProbeFailed {
        pid: i32,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl StatusError {
    /// Classify an IO error raised while reading `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StatusError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => StatusError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => StatusError::IoError(err),
        }
    }
}

/// Read a required text file, mapping failures onto [`StatusError`].
pub(crate) fn read_required(path: &Path) -> crate::Result<String> {
    std::fs::read_to_string(path).map_err(|e| StatusError::from_io(e, path))
}
