//! Executable discovery error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the classifier and enumerator.
///
/// Missing or unreadable search directories are expected conditions and
/// are skipped rather than reported; these variants cover the remaining,
/// genuinely fatal failures.
#[derive(Debug, Error)]
pub enum ExecutableError {
    /// Could not obtain file status for a path.
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A search directory failed to list for a reason other than
    /// not-found, not-a-directory, or permission-denied.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be resolved.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(io::Error),
}
