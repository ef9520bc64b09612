//! src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures the dispatcher reports before exiting with status 1.
#[derive(Debug, Error)]
pub enum DevlogError {
    #[error("Not inside a Git repository.")]
    NotARepository,

    #[error("Please provide a search query.")]
    MissingArgument,

    #[error("Filesystem operation failed on {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse log record {}: {source}", .path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Git command `git {args}` failed:\n{stderr}")]
    GitCommand { args: String, stderr: String },
}

impl DevlogError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
