//! Marker naming for backup and deletion renames.
//!
//! The engine never deletes destination content; it renames files with a
//! `~`-prefixed marker name instead. Any name starting with the marker
//! prefix is reserved: it is not a live mirrored file and the
//! deletion-marking scan leaves it alone.

use std::ffi::{OsStr, OsString};

/// Prefix shared by every marker file name.
pub const MARKER_PREFIX: &str = "~";

/// The two marker renames the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `~bak.` preserves a file's pre-overwrite content
    Backup,
    /// `~del.` records that the source counterpart no longer exists
    Deleted,
}

impl MarkerKind {
    /// Get the marker prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Backup => "~bak.",
            Self::Deleted => "~del.",
        }
    }

    /// Build the marker file name for `name`.
    pub fn apply(&self, name: impl AsRef<OsStr>) -> OsString {
        let mut marker = OsString::from(self.prefix());
        marker.push(name.as_ref());
        marker
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Whether `name` is reserved for markers.
pub fn is_marker_name(name: &str) -> bool {
    name.starts_with(MARKER_PREFIX)
}

/// Whether `name` is hidden under the dotfile convention.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
