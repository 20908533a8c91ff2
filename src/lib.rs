//! Cross-platform executable discovery and PATH-style environment inspection.
//!
//! Scripting-oriented accessors for list-valued environment variables
//! (`PATH`, `PATHEXT`) and a lazy enumerator over the executables they make
//! reachable. Nothing found is ever executed, and nothing is cached: every
//! call re-reads environment and filesystem state.
//!
//! # Example
//!
//! ```no_run
//! use pathprobe::{CwdMode, find_executable_sync};
//!
//! if let Some(git) = find_executable_sync("git", CwdMode::Excluded)? {
//!     println!("{}", git.path.display());
//! }
//! # Ok::<(), pathprobe::ExecutableError>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod env;
pub mod executable;
pub mod platform;

// Re-export commonly used types for convenience
pub use env::EnvError;
pub use executable::{
    CwdMode, EnumerateOptions, ExecutableEntry, ExecutableError, ExecutableIter, Filter,
    IsExecutableOptions, executables, executables_sync, find_executable, find_executable_sync,
    is_executable_path, is_executable_path_sync,
};
pub use platform::Platform;
