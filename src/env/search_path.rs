//! `PATH` accessors.
//!
//! The search-path variable is read as an ordered, first-occurrence-wins
//! de-duplicated list of directory strings. Mutation validates that every
//! argument is absolute before anything is written.

use std::path::PathBuf;

use super::delimited::{dedup_ordered, get_list, set_list};
use super::error::EnvError;

const PATH_VAR: &str = "PATH";

/// Ordered search directories from `PATH`.
///
/// Duplicates keep their first occurrence. Entries are not checked for
/// absoluteness here; the executable enumerator drops relative entries
/// defensively.
pub fn search_paths() -> Vec<PathBuf> {
    dedup_ordered(get_list(PATH_VAR))
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

/// Append directories to `PATH`, de-duplicating against existing entries.
///
/// Fails with [`EnvError::NotAbsolute`] before any write when a value is
/// relative. An empty slice is a no-op.
pub fn add_search_paths(values: &[PathBuf]) -> Result<(), EnvError> {
    assert_absolute(values)?;
    if values.is_empty() {
        return Ok(());
    }
    let mut entries = dedup_ordered(get_list(PATH_VAR));
    for value in values {
        let candidate = value.to_string_lossy().into_owned();
        if !entries.contains(&candidate) {
            entries.push(candidate);
        }
    }
    set_list(PATH_VAR, &entries);
    Ok(())
}

/// Remove directories from `PATH`.
///
/// Writes back only when the stored value would actually change; a stored
/// list that carried duplicates is rewritten de-duplicated.
pub fn remove_search_paths(values: &[PathBuf]) -> Result<(), EnvError> {
    assert_absolute(values)?;
    if values.is_empty() {
        return Ok(());
    }
    let raw = get_list(PATH_VAR);
    let mut entries = dedup_ordered(raw.clone());
    let had_duplicates = entries.len() != raw.len();

    let targets: Vec<String> = values
        .iter()
        .map(|value| value.to_string_lossy().into_owned())
        .collect();
    let before = entries.len();
    entries.retain(|entry| !targets.contains(entry));

    if had_duplicates || entries.len() != before {
        set_list(PATH_VAR, &entries);
    }
    Ok(())
}

fn assert_absolute(values: &[PathBuf]) -> Result<(), EnvError> {
    for value in values {
        if !value.is_absolute() {
            return Err(EnvError::NotAbsolute(value.clone()));
        }
    }
    Ok(())
}
