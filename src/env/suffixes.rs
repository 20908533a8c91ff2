//! `PATHEXT` accessors (Windows-family executable suffixes).
//!
//! Suffix filtering only exists on the Windows family; elsewhere the
//! accessor reports `None` ("not applicable"), which is distinct from an
//! empty list. An empty list never occurs: the standard default fills in
//! when the variable is unset or holds no tokens.

use super::delimited::{dedup_ordered, get_list, set_list};
use super::error::EnvError;
use crate::platform::Platform;

const PATHEXT_VAR: &str = "PATHEXT";

/// Standard suffix list used when `PATHEXT` is unset or empty.
pub const DEFAULT_EXECUTABLE_SUFFIXES: [&str; 11] = [
    ".COM", ".EXE", ".BAT", ".CMD", ".VBS", ".VBE", ".JS", ".JSE", ".WSF", ".WSH", ".MSC",
];

/// Recognized executable suffixes on the Windows family, `None` elsewhere.
pub fn executable_suffixes() -> Option<Vec<String>> {
    suffixes_for(Platform::current())
}

pub(crate) fn suffixes_for(platform: Platform) -> Option<Vec<String>> {
    if !platform.is_windows() {
        return None;
    }
    let stored = dedup_ordered(get_list(PATHEXT_VAR));
    if stored.is_empty() {
        Some(
            DEFAULT_EXECUTABLE_SUFFIXES
                .iter()
                .map(|suffix| (*suffix).to_string())
                .collect(),
        )
    } else {
        Some(stored)
    }
}

/// Add suffixes to `PATHEXT`, stored upper-cased.
///
/// Fails with [`EnvError::InvalidExtension`] before any write when a value
/// does not start with `.`. A no-op off the Windows family.
pub fn add_executable_suffixes(values: &[&str]) -> Result<(), EnvError> {
    assert_extensions(values)?;
    if Platform::current().is_windows() && !values.is_empty() {
        let mut entries = dedup_ordered(get_list(PATHEXT_VAR));
        for value in values {
            let upper = value.to_uppercase();
            if !entries.contains(&upper) {
                entries.push(upper);
            }
        }
        set_list(PATHEXT_VAR, &entries);
    }
    Ok(())
}

/// Remove suffixes from `PATHEXT`.
///
/// Validation matches [`add_executable_suffixes`]. A no-op off the Windows
/// family.
pub fn remove_executable_suffixes(values: &[&str]) -> Result<(), EnvError> {
    assert_extensions(values)?;
    if Platform::current().is_windows() && !values.is_empty() {
        let mut entries = dedup_ordered(get_list(PATHEXT_VAR));
        entries.retain(|entry| !values.iter().any(|value| *entry == value.to_uppercase()));
        set_list(PATHEXT_VAR, &entries);
    }
    Ok(())
}

fn assert_extensions(values: &[&str]) -> Result<(), EnvError> {
    for value in values {
        if !value.starts_with('.') {
            return Err(EnvError::InvalidExtension((*value).to_string()));
        }
    }
    Ok(())
}
