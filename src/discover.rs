//! Resolving a user-supplied path into the list of email files to process.

use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Files to process for `path`.
///
/// - a directory yields every regular file directly inside it whose extension
///   is exactly `extension`, sorted by path;
/// - a file is accepted only if it has that extension.
///
/// An empty directory yields an empty list; the caller decides whether that
/// is an error.
pub fn collect_files(path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(ExtractError::PathNotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| ExtractError::io(path, e))? {
            let entry = entry.map_err(|e| ExtractError::io(path, e))?;
            let candidate = entry.path();
            if candidate.is_file() && has_extension(&candidate, extension) {
                files.push(candidate);
            }
        }
        files.sort();
        tracing::debug!(dir = %path.display(), count = files.len(), "Collected email files");
        return Ok(files);
    }

    if has_extension(path, extension) {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(ExtractError::NoValidFile {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_listing_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.eml", "a.eml", "notes.txt", "c.EML"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.eml")).unwrap();

        let files = collect_files(dir.path(), "eml").unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.eml"), dir.path().join("b.eml")]
        );
    }

    #[test]
    fn test_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.eml");
        std::fs::write(&file, b"x").unwrap();
        assert_eq!(collect_files(&file, "eml").unwrap(), vec![file]);
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.txt");
        std::fs::write(&file, b"x").unwrap();
        let err = collect_files(&file, "eml").unwrap_err();
        assert!(matches!(err, ExtractError::NoValidFile { .. }));
    }

    #[test]
    fn test_missing_path() {
        let err = collect_files(Path::new("/no/such/dir"), "eml").unwrap_err();
        assert!(matches!(err, ExtractError::PathNotFound(_)));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(dir.path(), "eml").unwrap().is_empty());
    }
}
