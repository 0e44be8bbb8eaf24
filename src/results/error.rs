use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SummaryError {
    /// Filesystem operation failed (creating the output directory, writing the summary)
    Io {
        context: String,
        source: std::io::Error,
    },

    /// Summary could not be serialized to JSON
    JsonSerialize {
        context: String,
        source: serde_json::Error,
    },

    /// Directory walk failed below the results root
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
            SummaryError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            SummaryError::Walk { root, source } => {
                write!(f, "Failed to walk {}: {}", root.display(), source)
            }
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::Io { source, .. } => Some(source),
            SummaryError::JsonSerialize { source, .. } => Some(source),
            SummaryError::Walk { source, .. } => Some(source),
        }
    }
}
