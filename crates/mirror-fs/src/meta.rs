//! Entry metadata snapshots for change detection.

use std::fs;
use std::path::Path;

use filetime::FileTime;

use crate::{Error, Result};

/// Size and modification time of a filesystem entry.
///
/// Two snapshots compare equal iff both fields match exactly, and that
/// equality is the entire change-detection policy: content is never
/// hashed or byte-compared. Two files with identical size and mtime but
/// different content are treated as unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    /// File size in bytes
    pub size: u64,
    /// Last modification time at full platform precision
    pub mtime: FileTime,
}

impl EntryMeta {
    /// Snapshot the metadata of `path`, following symlinks.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            size: metadata.len(),
            mtime: FileTime::from_last_modification_time(&metadata),
        })
    }
}
