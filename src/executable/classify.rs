//! Platform-specific executable classification.
//!
//! Two rule variants: the Windows family matches the path against the
//! recognized suffix list, the POSIX family checks execute permission bits
//! against an effective identity. The rule is resolved once per call (and
//! once per enumeration), so `PATHEXT` and the process identity are read a
//! single time.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use crate::env;
use crate::platform::Platform;

use super::error::ExecutableError;

const OTHERS_EXECUTE: u32 = 0o001;
const GROUP_EXECUTE: u32 = 0o010;
const OWNER_EXECUTE: u32 = 0o100;

/// Options for [`is_executable_path`].
#[derive(Debug, Clone, Default)]
pub struct IsExecutableOptions {
    /// Report a missing path as not-executable instead of an error.
    pub may_not_exist: bool,

    /// Effective user ID for POSIX classification; defaults to the current
    /// process's uid.
    pub uid: Option<u32>,

    /// Effective group ID for POSIX classification; defaults to the
    /// current process's gid.
    pub gid: Option<u32>,
}

/// Classification rule resolved for one call.
#[derive(Debug, Clone)]
pub(crate) enum ClassifyRule {
    /// Windows family: recognized suffixes, compared case-insensitively.
    Suffixes(Vec<String>),
    /// POSIX family: execute bits checked against this effective identity.
    PermissionBits { uid: u32, gid: u32 },
}

impl ClassifyRule {
    /// Resolve the rule for `platform`, reading `PATHEXT` or the process
    /// identity as appropriate.
    pub(crate) fn resolve(platform: Platform, options: &IsExecutableOptions) -> Self {
        match platform {
            Platform::Windows => {
                Self::Suffixes(env::suffixes_for(platform).unwrap_or_default())
            }
            Platform::Posix => {
                let (uid, gid) = process_identity();
                Self::PermissionBits {
                    uid: options.uid.unwrap_or(uid),
                    gid: options.gid.unwrap_or(gid),
                }
            }
        }
    }

    /// Apply the rule to a path whose metadata has already been obtained.
    pub(crate) fn allows(&self, path: &Path, metadata: &Metadata) -> bool {
        match self {
            Self::Suffixes(suffixes) => matches_suffix(path, suffixes),
            Self::PermissionBits { uid, gid } => {
                #[cfg(unix)]
                {
                    use std::os::unix::fs::MetadataExt;
                    mode_allows_execute(
                        metadata.mode(),
                        metadata.uid(),
                        metadata.gid(),
                        *uid,
                        *gid,
                    )
                }
                #[cfg(not(unix))]
                {
                    let _ = (metadata, uid, gid);
                    false
                }
            }
        }
    }
}

/// Execute-bit policy: execute-by-others; execute-by-group with a gid
/// match; execute-by-owner with a uid match; or uid 0 with either the
/// owner or group execute bit set.
pub(crate) fn mode_allows_execute(
    mode: u32,
    file_uid: u32,
    file_gid: u32,
    uid: u32,
    gid: u32,
) -> bool {
    mode & OTHERS_EXECUTE != 0
        || (mode & GROUP_EXECUTE != 0 && gid == file_gid)
        || (mode & OWNER_EXECUTE != 0 && uid == file_uid)
        || (mode & (OWNER_EXECUTE | GROUP_EXECUTE) != 0 && uid == 0)
}

/// Case-insensitive suffix test; a path equal to the bare suffix itself
/// does not count.
pub(crate) fn matches_suffix(path: &Path, suffixes: &[String]) -> bool {
    let lowered = path.to_string_lossy().to_lowercase();
    suffixes.iter().any(|suffix| {
        let suffix = suffix.to_lowercase();
        lowered != suffix && lowered.ends_with(&suffix)
    })
}

#[cfg(unix)]
fn process_identity() -> (u32, u32) {
    (
        nix::unistd::getuid().as_raw(),
        nix::unistd::getgid().as_raw(),
    )
}

#[cfg(not(unix))]
fn process_identity() -> (u32, u32) {
    // The POSIX rule is never resolved on the Windows family.
    (0, 0)
}

/// Whether `path` names an executable file on the current platform.
///
/// A path that does not resolve to a regular file is not executable. Stat
/// failures are surfaced, including permission-denied; the one exception
/// is a missing path under `may_not_exist`, which reports `false`.
pub async fn is_executable_path(
    path: impl AsRef<Path>,
    options: &IsExecutableOptions,
) -> Result<bool, ExecutableError> {
    let path = path.as_ref();
    let rule = ClassifyRule::resolve(Platform::current(), options);
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file() && rule.allows(path, &metadata)),
        Err(source) => stat_failure(path, source, options.may_not_exist),
    }
}

/// Blocking form of [`is_executable_path`].
pub fn is_executable_path_sync(
    path: impl AsRef<Path>,
    options: &IsExecutableOptions,
) -> Result<bool, ExecutableError> {
    let path = path.as_ref();
    let rule = ClassifyRule::resolve(Platform::current(), options);
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file() && rule.allows(path, &metadata)),
        Err(source) => stat_failure(path, source, options.may_not_exist),
    }
}

/// Classification used per enumeration entry: any failure here means the
/// entry is skipped, not that the enumeration fails.
pub(crate) async fn probe(rule: &ClassifyRule, path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata.is_file() && rule.allows(path, &metadata),
        Err(_) => false,
    }
}

/// Blocking form of [`probe`].
pub(crate) fn probe_sync(rule: &ClassifyRule, path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && rule.allows(path, &metadata),
        Err(_) => false,
    }
}

fn stat_failure(
    path: &Path,
    source: io::Error,
    may_not_exist: bool,
) -> Result<bool, ExecutableError> {
    if may_not_exist && source.kind() == io::ErrorKind::NotFound {
        Ok(false)
    } else {
        Err(ExecutableError::Stat {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn others_execute_bit_is_enough() {
        assert!(mode_allows_execute(0o100001, 10, 10, 500, 500));
        assert!(!mode_allows_execute(0o100000, 10, 10, 500, 500));
    }

    #[test]
    fn group_execute_requires_gid_match() {
        assert!(mode_allows_execute(0o100010, 10, 500, 999, 500));
        assert!(!mode_allows_execute(0o100010, 10, 10, 999, 500));
    }

    #[test]
    fn owner_execute_requires_uid_match() {
        assert!(mode_allows_execute(0o100100, 500, 10, 500, 999));
        assert!(!mode_allows_execute(0o100100, 10, 10, 500, 999));
    }

    #[test]
    fn superuser_bypasses_ownership_but_not_missing_bits() {
        // uid 0 passes with owner- or group-execute set on someone else's file
        assert!(mode_allows_execute(0o100100, 500, 500, 0, 0));
        assert!(mode_allows_execute(0o100010, 500, 500, 0, 0));
        // but not when no execute bit is set at all
        assert!(!mode_allows_execute(0o100644, 500, 500, 0, 0));
    }

    #[test]
    fn suffix_match_is_case_insensitive() {
        let suffixes = vec![".COM".to_string(), ".EXE".to_string()];

        assert!(matches_suffix(Path::new(r"C:\tools\run.EXE"), &suffixes));
        assert!(matches_suffix(Path::new(r"C:\tools\run.exe"), &suffixes));
        assert!(!matches_suffix(Path::new(r"C:\tools\run.sh"), &suffixes));
    }

    #[test]
    fn bare_suffix_path_does_not_match() {
        let suffixes = vec![".EXE".to_string()];

        assert!(!matches_suffix(Path::new(".exe"), &suffixes));
        assert!(!matches_suffix(Path::new(".EXE"), &suffixes));
    }

    #[test]
    fn windows_rule_reads_pathext_once_resolved() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvVarGuard::set("PATHEXT", ".EXE");

        let rule = ClassifyRule::resolve(Platform::Windows, &IsExecutableOptions::default());
        match rule {
            ClassifyRule::Suffixes(suffixes) => assert_eq!(suffixes, vec![".EXE"]),
            ClassifyRule::PermissionBits { .. } => panic!("expected suffix rule"),
        }
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        #[test]
        fn regular_file_with_execute_bit_is_executable() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tool");
            fs::write(&path, b"#!/bin/sh\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

            assert!(is_executable_path_sync(&path, &IsExecutableOptions::default()).unwrap());
        }

        #[test]
        fn plain_file_is_not_executable() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("notes.txt");
            fs::write(&path, b"text").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

            assert!(!is_executable_path_sync(&path, &IsExecutableOptions::default()).unwrap());
        }

        #[test]
        fn directory_is_not_executable() {
            let dir = tempfile::tempdir().unwrap();

            assert!(!is_executable_path_sync(dir.path(), &IsExecutableOptions::default()).unwrap());
        }

        #[test]
        fn missing_path_errors_unless_allowed() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("gone");

            let result = is_executable_path_sync(&path, &IsExecutableOptions::default());
            assert!(matches!(result, Err(ExecutableError::Stat { .. })));

            let options = IsExecutableOptions {
                may_not_exist: true,
                ..Default::default()
            };
            assert!(!is_executable_path_sync(&path, &options).unwrap());
        }

        #[test]
        fn identity_override_is_honored() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tool");
            fs::write(&path, b"#!/bin/sh\n").unwrap();
            // owner-execute only
            fs::set_permissions(&path, fs::Permissions::from_mode(0o700)).unwrap();

            let other = IsExecutableOptions {
                uid: Some(u32::MAX - 1),
                gid: Some(u32::MAX - 1),
                ..Default::default()
            };
            assert!(!is_executable_path_sync(&path, &other).unwrap());

            let root = IsExecutableOptions {
                uid: Some(0),
                gid: Some(u32::MAX - 1),
                ..Default::default()
            };
            assert!(is_executable_path_sync(&path, &root).unwrap());
        }

        #[test]
        fn classification_is_idempotent() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tool");
            fs::write(&path, b"#!/bin/sh\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

            let options = IsExecutableOptions::default();
            let first = is_executable_path_sync(&path, &options).unwrap();
            let second = is_executable_path_sync(&path, &options).unwrap();
            assert_eq!(first, second);
        }

        #[tokio::test]
        async fn async_form_agrees_with_blocking_form() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tool");
            fs::write(&path, b"#!/bin/sh\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

            let options = IsExecutableOptions::default();
            assert_eq!(
                is_executable_path(&path, &options).await.unwrap(),
                is_executable_path_sync(&path, &options).unwrap()
            );
        }
    }
}
