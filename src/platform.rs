//! Platform family identification.
//!
//! Executable detection branches on exactly two families: the Windows
//! family recognizes executables by filename suffix (`PATHEXT`), everything
//! else by POSIX permission bits. The family is resolved once per call and
//! passed down, keeping each branch unit-testable with fabricated inputs.

use serde::{Deserialize, Serialize};

/// The two platform families this crate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Windows family: executables carry a recognized filename suffix.
    Windows,
    /// POSIX family: executables carry execute permission bits.
    Posix,
}

impl Platform {
    /// Family of the platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether this is the suffix-matching (Windows) family.
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}
