//! Filesystem queries used while scanning the catalog

use crate::{CatalogError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Immediate subdirectories of `dir`, sorted by name
///
/// A missing directory has no subdirectories.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CatalogError::Generic(e.into()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// True when every named file exists directly inside `dir`
pub fn has_all_files(dir: &Path, names: &[String]) -> bool {
    names.iter().all(|name| dir.join(name).is_file())
}

/// Names of released entries: the stems of `*.zip` archives in the release directory
pub fn released_entries(release_dir: &Path) -> Result<HashSet<String>> {
    let pattern = format!(
        "{}/*.zip",
        glob::Pattern::escape(&release_dir.to_string_lossy())
    );

    let mut released = HashSet::new();
    let paths = glob::glob(&pattern).map_err(|e| {
        CatalogError::Config(format!("Invalid release pattern {}: {}", pattern, e))
    })?;

    for path in paths {
        let path = path.map_err(|e| CatalogError::Io(e.into_error()))?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            released.insert(stem.to_string());
        }
    }

    debug!("Found {} released entries in {:?}", released.len(), release_dir);
    Ok(released)
}

/// Relative paths of every file under `dir` with the given extension, sorted
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| CatalogError::Generic(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            if let Ok(relative) = entry.path().strip_prefix(dir) {
                files.push(relative.to_path_buf());
            }
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_subdirectories_sorted() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("b")).unwrap();
        std::fs::create_dir(temp_dir.path().join("a")).unwrap();
        std::fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

        let dirs = list_subdirectories(temp_dir.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_list_subdirectories_missing_dir() {
        let dirs = list_subdirectories(Path::new("/nonexistent/catalog")).unwrap();
        assert!(dirs.is_empty());
    }

    #[test]
    fn test_released_entries_uses_zip_stems() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Aurora by Aemiii91.zip"), "").unwrap();
        std::fs::write(temp_dir.path().join("[Beta] Retro.zip"), "").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let released = released_entries(temp_dir.path()).unwrap();
        assert_eq!(released.len(), 2);
        assert!(released.contains("Aurora by Aemiii91"));
        assert!(released.contains("[Beta] Retro"));
    }

    #[test]
    fn test_files_with_extension_relative() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("console")).unwrap();
        std::fs::write(temp_dir.path().join("app.png"), "").unwrap();
        std::fs::write(temp_dir.path().join("console/gba.PNG"), "").unwrap();
        std::fs::write(temp_dir.path().join("readme.md"), "").unwrap();

        let files = files_with_extension(temp_dir.path(), "png").unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("app.png"), PathBuf::from("console/gba.PNG")]
        );
    }
}
