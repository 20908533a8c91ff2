//! Environment-variable accessors with list-style semantics.
//!
//! Layers, leaf to root: raw get/set wrappers (`general`), delimiter-joined
//! list values (`delimited`), and the two list-valued variables the
//! executable enumerator consumes (`PATH`, `PATHEXT`).
//!
//! # Design
//!
//! - Every read is fresh; concurrent external mutation of the environment
//!   is observed by the next call.
//! - Validation errors surface before anything is written, so a failed
//!   mutation leaves the variable untouched.
//! - OS-family differences are confined to [`LIST_DELIMITER`] and the
//!   `PATHEXT` accessors.

mod delimited;
mod error;
mod general;
mod search_path;
mod suffixes;

#[cfg(test)]
pub(crate) mod test_utils;

pub use delimited::{
    LIST_DELIMITER, POSIX_LIST_DELIMITER, WINDOWS_LIST_DELIMITER, get_list, set_list,
};
pub use error::EnvError;
pub use general::{contains, get, remove, set, snapshot};
pub use search_path::{add_search_paths, remove_search_paths, search_paths};
pub use suffixes::{
    DEFAULT_EXECUTABLE_SUFFIXES, add_executable_suffixes, executable_suffixes,
    remove_executable_suffixes,
};

pub(crate) use suffixes::suffixes_for;
