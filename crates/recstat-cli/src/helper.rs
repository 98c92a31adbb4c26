//! Environment checks around the daemon's companion tools.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Find `name` on `PATH`, like `which`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    find_in(name, &path_var)
}

/// Find `name` in the directories listed in `search_path`.
pub fn find_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let candidate = PathBuf::from(name);
        return is_executable(&candidate).then_some(candidate);
    }

    std::env::split_paths(search_path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Whether `path` is an existing directory we can list.
pub fn readable_directory(path: &str) -> Result<PathBuf, String> {
    let dir = PathBuf::from(path);
    if !dir.is_dir() {
        return Err(format!("not an existing directory: {}", path));
    }
    if std::fs::read_dir(&dir).is_err() {
        return Err(format!("not a readable directory: {}", path));
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::write(path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_search_path() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&first.path().join("recoll"), 0o644);
        make_executable(&second.path().join("recoll"), 0o755);

        let search = std::env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(
            find_in("recoll", &search),
            Some(second.path().join("recoll"))
        );
        assert_eq!(find_in("recollq", &search), None);
    }

    #[test]
    fn test_readable_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(readable_directory(path).unwrap(), dir.path());

        let missing = dir.path().join("missing");
        let err = readable_directory(missing.to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("not an existing directory"));

        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();
        assert!(readable_directory(file.to_str().unwrap()).is_err());
    }
}
