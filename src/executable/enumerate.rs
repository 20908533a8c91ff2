//! Search-path enumeration.
//!
//! Walks the directories named by `PATH` (optionally preceded by a working
//! directory), classifies each entry with the per-call rule, and yields
//! de-duplicated entries in search order; the first directory to contain
//! an absolute path wins. The async form is a lazy [`Stream`], the
//! blocking form a plain [`Iterator`]; both re-read the environment on
//! every call and own their yielded-set, so concurrent enumerations are
//! independent.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_stream::stream;
use futures_util::{Stream, StreamExt, pin_mut};
use tracing::debug;

use crate::env;
use crate::platform::Platform;

use super::classify::{ClassifyRule, IsExecutableOptions, probe, probe_sync};
use super::entry::ExecutableEntry;
use super::error::ExecutableError;
use super::filter::{Filter, matches_any};

/// Working-directory inclusion for an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CwdMode {
    /// Do not search the working directory.
    #[default]
    Excluded,
    /// Prepend the process's current working directory to the search list.
    Current,
    /// Prepend an explicit directory to the search list.
    Explicit(PathBuf),
}

/// Options for [`executables`] and [`executables_sync`].
#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    /// Working-directory inclusion; excluded by default.
    pub cwd: CwdMode,
    /// Entry filters; an empty set yields every executable found.
    pub filters: Vec<Filter>,
}

/// Lazily enumerate the executables reachable via the search path.
///
/// Entries come in search order; a duplicate absolute path in a later
/// directory is suppressed. Missing, file-typed, or permission-denied
/// search directories are skipped; any other directory failure ends the
/// stream with its error, and entries already produced remain valid.
/// Dropping the stream is the only cancellation and leaves no background
/// work.
pub fn executables(
    options: EnumerateOptions,
) -> impl Stream<Item = Result<ExecutableEntry, ExecutableError>> {
    stream! {
        let rule = ClassifyRule::resolve(Platform::current(), &IsExecutableOptions::default());
        let directories = match effective_directories(&options.cwd) {
            Ok(directories) => directories,
            Err(error) => {
                yield Err(error);
                return;
            }
        };

        let mut yielded: HashSet<PathBuf> = HashSet::new();
        for directory in directories {
            let mut entries = match tokio::fs::read_dir(&directory).await {
                Ok(entries) => entries,
                Err(error) if is_skippable_listing_error(&error) => {
                    debug!(directory = %directory.display(), %error, "skipping search directory");
                    continue;
                }
                Err(source) => {
                    yield Err(ExecutableError::ReadDir { path: directory.clone(), source });
                    return;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(error) if is_skippable_listing_error(&error) => {
                        debug!(directory = %directory.display(), %error, "skipping search directory");
                        break;
                    }
                    Err(source) => {
                        yield Err(ExecutableError::ReadDir { path: directory.clone(), source });
                        return;
                    }
                };

                let Ok(basename) = entry.file_name().into_string() else {
                    continue;
                };
                let path = directory.join(&basename);
                if yielded.contains(&path) || !probe(&rule, &path).await {
                    continue;
                }
                let name = stripped_name(&basename, Platform::current());
                if matches_any(&options.filters, &basename, &name, &path) {
                    yielded.insert(path.clone());
                    yield Ok(ExecutableEntry { basename, name, path });
                }
            }
        }
    }
}

/// Blocking form of [`executables`].
pub fn executables_sync(options: EnumerateOptions) -> ExecutableIter {
    let rule = ClassifyRule::resolve(Platform::current(), &IsExecutableOptions::default());
    let (directories, pending_error) = match effective_directories(&options.cwd) {
        Ok(directories) => (directories.into(), None),
        Err(error) => (VecDeque::new(), Some(error)),
    };
    ExecutableIter {
        rule,
        filters: options.filters,
        directories,
        current: None,
        yielded: HashSet::new(),
        pending_error,
        done: false,
    }
}

/// First executable matching `specifier`, or `None` when nothing matches.
///
/// Pulls the enumeration only as far as the first match.
pub async fn find_executable(
    specifier: impl Into<Filter>,
    cwd: CwdMode,
) -> Result<Option<ExecutableEntry>, ExecutableError> {
    let stream = executables(EnumerateOptions {
        cwd,
        filters: vec![specifier.into()],
    });
    pin_mut!(stream);
    stream.next().await.transpose()
}

/// Blocking form of [`find_executable`].
pub fn find_executable_sync(
    specifier: impl Into<Filter>,
    cwd: CwdMode,
) -> Result<Option<ExecutableEntry>, ExecutableError> {
    executables_sync(EnumerateOptions {
        cwd,
        filters: vec![specifier.into()],
    })
    .next()
    .transpose()
}

/// Blocking enumerator created by [`executables_sync`].
///
/// Yields the same sequence as the async form. After a fatal error the
/// iterator is exhausted.
pub struct ExecutableIter {
    rule: ClassifyRule,
    filters: Vec<Filter>,
    directories: VecDeque<PathBuf>,
    current: Option<(PathBuf, fs::ReadDir)>,
    yielded: HashSet<PathBuf>,
    pending_error: Option<ExecutableError>,
    done: bool,
}

impl ExecutableIter {
    /// Inspect one directory entry; `Some` when it classified as
    /// executable, passed the filters, and was not yielded before.
    fn inspect(&mut self, directory: &Path, entry: &fs::DirEntry) -> Option<ExecutableEntry> {
        let basename = entry.file_name().into_string().ok()?;
        let path = directory.join(&basename);
        if self.yielded.contains(&path) || !probe_sync(&self.rule, &path) {
            return None;
        }
        let name = stripped_name(&basename, Platform::current());
        if !matches_any(&self.filters, &basename, &name, &path) {
            return None;
        }
        self.yielded.insert(path.clone());
        Some(ExecutableEntry {
            basename,
            name,
            path,
        })
    }
}

impl Iterator for ExecutableIter {
    type Item = Result<ExecutableEntry, ExecutableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.pending_error.take() {
            self.done = true;
            return Some(Err(error));
        }
        loop {
            // Advance within the directory currently being listed.
            if let Some((directory, mut entries)) = self.current.take() {
                match entries.next() {
                    Some(Ok(entry)) => {
                        let produced = self.inspect(&directory, &entry);
                        self.current = Some((directory, entries));
                        if let Some(found) = produced {
                            return Some(Ok(found));
                        }
                    }
                    Some(Err(error)) if is_skippable_listing_error(&error) => {
                        debug!(directory = %directory.display(), %error, "skipping search directory");
                    }
                    Some(Err(source)) => {
                        self.done = true;
                        return Some(Err(ExecutableError::ReadDir {
                            path: directory,
                            source,
                        }));
                    }
                    None => {}
                }
                continue;
            }

            // Open the next search directory.
            let Some(directory) = self.directories.pop_front() else {
                self.done = true;
                return None;
            };
            match fs::read_dir(&directory) {
                Ok(entries) => self.current = Some((directory, entries)),
                Err(error) if is_skippable_listing_error(&error) => {
                    debug!(directory = %directory.display(), %error, "skipping search directory");
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(ExecutableError::ReadDir {
                        path: directory,
                        source,
                    }));
                }
            }
        }
    }
}

/// Effective search list: the requested working directory (if any)
/// followed by `PATH`, with relative entries dropped.
fn effective_directories(cwd: &CwdMode) -> Result<Vec<PathBuf>, ExecutableError> {
    let mut directories = Vec::new();
    match cwd {
        CwdMode::Excluded => {}
        CwdMode::Current => {
            directories.push(std::env::current_dir().map_err(ExecutableError::CurrentDir)?);
        }
        CwdMode::Explicit(directory) => directories.push(directory.clone()),
    }
    directories.extend(env::search_paths());
    directories.retain(|directory| directory.is_absolute());
    Ok(directories)
}

/// `name` for an entry: on the Windows family the trailing extension is
/// stripped (dotfiles keep their full name); elsewhere the basename is
/// used as-is.
fn stripped_name(basename: &str, platform: Platform) -> String {
    if platform.is_windows() {
        Path::new(basename).file_stem().map_or_else(
            || basename.to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
    } else {
        basename.to_string()
    }
}

fn is_skippable_listing_error(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::PermissionDenied
    )
}
