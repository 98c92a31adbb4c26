//! Common test utilities for integration tests.

use recstat_core::DaemonPaths;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Load a progress-file fixture from the fixtures directory.
pub fn load_progress_fixture(name: &str) -> String {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("idxstatus")
        .join(format!("{}.txt", name));

    fs::read_to_string(&fixture_path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", fixture_path.display(), e))
}

/// Seconds since the epoch used as the reference point in timing tests.
pub const BASE_SECS: u64 = 1_790_000_000;

pub fn at(offset_secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(BASE_SECS + offset_secs)
}

/// A scratch daemon working directory.
pub struct DaemonDir {
    pub dir: TempDir,
    pub paths: DaemonPaths,
}

impl DaemonDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let paths = DaemonPaths::new(dir.path());
        Self { dir, paths }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Record our own PID so the daemon looks alive.
    pub fn mark_running(&self) -> &Self {
        write_with_mtime(&self.paths.pid_file(), &std::process::id().to_string(), at(0));
        self
    }

    /// Leave an empty PID file, as the daemon does on clean exit.
    pub fn mark_stopped(&self) -> &Self {
        write_with_mtime(&self.paths.pid_file(), "", at(0));
        self
    }

    pub fn lock(&self, mtime: SystemTime) -> &Self {
        write_with_mtime(&self.paths.lock_file(), "", mtime);
        self
    }

    pub fn progress(&self, fixture: &str, mtime: SystemTime) -> &Self {
        write_with_mtime(&self.paths.progress_file(), &load_progress_fixture(fixture), mtime);
        self
    }

    pub fn history(&self, mtime: SystemTime) -> &Self {
        write_with_mtime(&self.paths.history_file(), "", mtime);
        self
    }
}

pub fn write_with_mtime(path: &Path, content: &str, mtime: SystemTime) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_done_fixture() {
        let content = load_progress_fixture("done");
        assert!(content.starts_with("phase = 6"));
    }
}
