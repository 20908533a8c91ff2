//! Executable discovery: classification and search-path enumeration.
//!
//! # Design
//!
//! - The classification rule (suffix list vs permission bits) is resolved
//!   once per call, so `PATHEXT` and the process identity are read a single
//!   time per enumeration.
//! - Enumeration is pull-based in both forms: nothing is buffered ahead of
//!   the caller, nothing is cached between calls, and dropping the
//!   sequence is the only cancellation.

mod classify;
mod entry;
mod enumerate;
mod error;
mod filter;

pub use classify::{IsExecutableOptions, is_executable_path, is_executable_path_sync};
pub use entry::ExecutableEntry;
pub use enumerate::{
    CwdMode, EnumerateOptions, ExecutableIter, executables, executables_sync, find_executable,
    find_executable_sync,
};
pub use error::ExecutableError;
pub use filter::Filter;
