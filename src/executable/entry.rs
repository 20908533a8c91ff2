//! Discovered executable entries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One executable discovered on the search path.
///
/// Constructed per yielded result and never mutated; `path` is always
/// absolute and `basename` is always a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableEntry {
    /// Raw directory-entry name, including any platform suffix.
    /// e.g. `git.exe`
    pub basename: String,

    /// `basename` with the platform executable suffix stripped on the
    /// Windows family; equal to `basename` elsewhere. e.g. `git`
    pub name: String,

    /// Absolute path: the search directory joined with `basename`.
    pub path: PathBuf,
}
