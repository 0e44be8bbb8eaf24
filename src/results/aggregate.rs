use std::fs;
use std::path::{Path, PathBuf};

use crate::report::report_model::FileDetail;
use crate::results::record_model::parse_record;

/// One input file that could not be read or decoded. Skipped files never
/// appear in the summary; they are surfaced as diagnostics only.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of folding a set of discovered files into per-file details.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Per-file breakdowns for successfully parsed files, in discovery order
    pub details: Vec<FileDetail>,

    /// Files that failed to read or decode
    pub skipped: Vec<SkippedFile>,
}

impl Aggregation {
    /// Number of files that actually contributed to the totals.
    pub fn parsed_files(&self) -> usize {
        self.details.len()
    }
}

/// Read and parse each discovered file, accumulating a `FileDetail` per
/// parsed file. A file that fails to read or decode is recorded as skipped
/// and the loop continues; per-file failure is never fatal.
///
/// `base_dir` is the directory detail paths are shown relative to; callers
/// inject it rather than having the fold read the current directory.
pub fn aggregate_files(files: &[PathBuf], base_dir: &Path) -> Aggregation {
    let mut agg = Aggregation::default();

    for path in files {
        let outcome = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| parse_record(&content).map_err(|e| e.to_string()));

        match outcome {
            Ok(record) => agg.details.push(FileDetail {
                path: display_path(path, base_dir),
                total: record.total,
                failed: record.failed,
                passed: record.passed(),
            }),
            Err(reason) => agg.skipped.push(SkippedFile {
                path: path.clone(),
                reason,
            }),
        }
    }

    agg
}

/// Render a path relative to `base_dir` when possible, as-is otherwise.
fn display_path(path: &Path, base_dir: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
