use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::results::error::SummaryError;

/// Recursively collect every regular file under `root` with a `.json`
/// extension.
///
/// A missing root means there is nothing to summarize, not an error. The
/// list is sorted by path so discovery order is deterministic.
pub fn find_result_files(root: &Path) -> Result<Vec<PathBuf>, SummaryError> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| SummaryError::Walk {
            root: root.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().map_or(false, |ext| ext == "json")
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
