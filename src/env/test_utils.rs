//! Test utilities for environment-variable isolation.
//!
//! Tests that read or mutate process environment variables must hold
//! [`ENV_LOCK`] for their whole body; cargo runs tests in parallel and the
//! environment is process-global.

use std::sync::Mutex;

use super::delimited::join_list;
use super::general;

/// Serializes tests that touch process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Join entries with the platform list delimiter.
pub fn join_entries(entries: &[&str]) -> String {
    join_list(entries)
}

/// RAII guard that restores a variable's prior state on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set a variable, remembering its prior state.
    pub fn set(key: &str, value: &str) -> Self {
        let previous = general::get(key);
        general::set(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove a variable, remembering its prior state.
    pub fn unset(key: &str) -> Self {
        let previous = general::get(key);
        general::remove(key);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => general::set(&self.key, &value),
            None => general::remove(&self.key),
        }
    }
}
