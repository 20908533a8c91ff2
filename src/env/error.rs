//! Environment accessor error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the list-valued environment mutators.
///
/// Validation runs before any environment write, so a failed call leaves
/// the variable untouched.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A search-path mutation was given a relative path.
    #[error("`{}` is not an absolute path", .0.display())]
    NotAbsolute(PathBuf),

    /// An executable-suffix mutation was given a value without the leading
    /// `.` separator.
    #[error("`{0}` is not a valid file extension")]
    InvalidExtension(String),
}
