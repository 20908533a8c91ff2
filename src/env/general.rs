//! Raw process-environment accessors.
//!
//! Thin wrappers over [`std::env`]. Mutation is process-global and is not
//! synchronized with other threads reading the environment through the C
//! runtime; callers that mutate concurrently must serialize themselves
//! (the test suite does so with a shared lock).

use std::collections::HashMap;
use std::env;

/// Get the value of an environment variable.
///
/// Returns `None` when the variable is unset or not valid Unicode.
pub fn get(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Set an environment variable.
#[allow(unsafe_code)]
pub fn set(key: &str, value: &str) {
    // SAFETY: process-global mutation; callers serialize concurrent access.
    unsafe {
        env::set_var(key, value);
    }
}

/// Remove an environment variable.
#[allow(unsafe_code)]
pub fn remove(key: &str) {
    // SAFETY: see `set`.
    unsafe {
        env::remove_var(key);
    }
}

/// Check whether an environment variable is present.
pub fn contains(key: &str) -> bool {
    env::var_os(key).is_some()
}

/// Snapshot of all Unicode-valued environment variables at invocation.
pub fn snapshot() -> HashMap<String, String> {
    env::vars().collect()
}
