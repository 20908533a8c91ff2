//! Delimiter-joined list semantics for environment variable values.
//!
//! A list-valued variable is one string whose non-empty tokens are joined
//! by the platform delimiter. Empty tokens are dropped on both read and
//! write, so `"/a::/b"` reads as two entries and round-trips as `"/a:/b"`.

use std::collections::HashSet;

use super::general;

/// List delimiter on POSIX-family platforms.
pub const POSIX_LIST_DELIMITER: char = ':';

/// List delimiter on Windows-family platforms.
pub const WINDOWS_LIST_DELIMITER: char = ';';

/// List delimiter for the platform this crate was compiled for.
pub const LIST_DELIMITER: char = if cfg!(windows) {
    WINDOWS_LIST_DELIMITER
} else {
    POSIX_LIST_DELIMITER
};

/// Read an environment variable as an ordered list of non-empty tokens.
///
/// An unset variable reads as an empty list.
pub fn get_list(key: &str) -> Vec<String> {
    split_list(&general::get(key).unwrap_or_default())
}

/// Write an ordered list of tokens to an environment variable.
pub fn set_list<S: AsRef<str>>(key: &str, values: &[S]) {
    general::set(key, &join_list(values));
}

pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn join_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(&LIST_DELIMITER.to_string())
}

/// De-duplicate preserving first-occurrence order.
pub(crate) fn dedup_ordered(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
