//! Name and pattern filters for enumeration.

use std::path::Path;

use regex::Regex;

/// Filter tested against a candidate's basename, stripped name, and full
/// path.
///
/// A filter set matches when any member matches; an empty set matches
/// everything.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Exact string comparison.
    Exact(String),
    /// Unanchored regular-expression match.
    Pattern(Regex),
}

impl Filter {
    /// Whether this filter accepts the candidate.
    pub fn matches(&self, basename: &str, name: &str, path: &Path) -> bool {
        let path = path.to_string_lossy();
        match self {
            Self::Exact(text) => {
                let text = text.as_str();
                text == basename || text == name || text == path.as_ref()
            }
            Self::Pattern(pattern) => {
                pattern.is_match(basename) || pattern.is_match(name) || pattern.is_match(&path)
            }
        }
    }
}

impl From<&str> for Filter {
    fn from(text: &str) -> Self {
        Self::Exact(text.to_string())
    }
}

impl From<String> for Filter {
    fn from(text: String) -> Self {
        Self::Exact(text)
    }
}

impl From<Regex> for Filter {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

/// An empty filter set matches everything.
pub(crate) fn matches_any(filters: &[Filter], basename: &str, name: &str, path: &Path) -> bool {
    filters.is_empty() || filters.iter().any(|filter| filter.matches(basename, name, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_any_of_the_three_candidates() {
        let path = Path::new("/usr/bin/git");

        assert!(Filter::from("git").matches("git", "git", path));
        assert!(Filter::from("/usr/bin/git").matches("git", "git", path));
        assert!(!Filter::from("gi").matches("git", "git", path));
    }

    #[test]
    fn exact_matches_stripped_name() {
        let path = Path::new(r"C:\tools\run.EXE");

        assert!(Filter::from("run").matches("run.EXE", "run", path));
        assert!(Filter::from("run.EXE").matches("run.EXE", "run", path));
    }

    #[test]
    fn pattern_matches_unanchored() {
        let filter = Filter::from(Regex::new(r"^git").unwrap());

        assert!(filter.matches("git-lfs", "git-lfs", Path::new("/usr/bin/git-lfs")));
        assert!(!filter.matches("tig", "tig", Path::new("/usr/bin/tig")));
    }

    #[test]
    fn empty_set_matches_everything() {
        assert!(matches_any(&[], "anything", "anything", Path::new("/x")));

        let filters = vec![Filter::from("other")];
        assert!(!matches_any(&filters, "anything", "anything", Path::new("/x")));
    }
}
