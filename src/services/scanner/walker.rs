//! Directory listing for the scan root.
//! Only regular files directly inside the directory are considered;
//! subdirectories are never descended into.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::ScanError;

/// List the regular files directly inside `dir`, sorted by file name.
///
/// The sorted order is the enumeration order for the rest of the run, so
/// reports come out the same way on every platform. Unreadable entries
/// are logged and skipped.
pub fn list_mod_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::Missing(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| ScanError::Unreadable(dir.display().to_string(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_regular_files_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("charlie.jar"), b"c").unwrap();
        fs::write(dir.path().join("alpha.jar"), b"a").unwrap();
        fs::write(dir.path().join("bravo.jar"), b"b").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("hidden.jar"), b"x").unwrap();

        let files = list_mod_files(dir.path()).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.jar", "bravo.jar", "charlie.jar"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(list_mod_files(Path::new("/nonexistent/mods")).is_err());
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir.jar");
        fs::write(&file, b"data").unwrap();

        match list_mod_files(&file) {
            Err(ScanError::NotADirectory(_)) => {}
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(list_mod_files(dir.path()).unwrap().is_empty());
    }
}
