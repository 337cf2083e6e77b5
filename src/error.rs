//! Error and warning types for scanning and pattern loading

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal precondition failures on the project root. Traversal never starts
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("project root '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("project root '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}

/// Non-fatal conditions collected during loading and traversal.
///
/// Warnings never abort a run; they are returned alongside results so the
/// caller can report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A pattern line that could not be parsed as written and was degraded
    /// to a literal match.
    #[error("pattern '{pattern}': {detail}; matching it as literal text")]
    Parse { pattern: String, detail: String },

    /// A filesystem entry that could not be read during loading or
    /// traversal and was skipped.
    #[error("cannot access '{path}': {detail}")]
    Access { path: String, detail: String },
}

impl Warning {
    pub fn parse(pattern: &str, detail: &str) -> Self {
        Self::Parse {
            pattern: pattern.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn access(path: &Path, err: &io::Error) -> Self {
        Self::Access {
            path: path.display().to_string(),
            detail: err.to_string(),
        }
    }
}
