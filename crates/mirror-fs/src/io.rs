//! Primitive filesystem operations for the mirror engine.
//!
//! Everything here mutates via create-directory, copy, and rename only;
//! nothing in this crate ever deletes a file.

use std::fs;
use std::path::Path;

use filetime::FileTime;

use crate::{Error, Result};

/// Ensure `path` exists as a directory, creating it if absent.
///
/// Fails if the path is occupied by something that is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Copy `src` over `dest` and restore the source's modification time on
/// the copy.
///
/// `fs::copy` preserves permissions but not mtime; without the restore a
/// freshly mirrored file would read as changed on the next run.
pub fn copy_with_attributes(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(|e| Error::io(dest, e))?;

    let metadata = fs::metadata(src).map_err(|e| Error::io(src, e))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dest, mtime).map_err(|e| Error::io(dest, e))?;

    Ok(())
}

/// Rename `from` to `to`, failing if `to` already exists.
///
/// `fs::rename` silently replaces an existing target on most platforms;
/// markers must never be overwritten, so existence is checked first.
pub fn rename_exclusive(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(Error::MarkerExists {
            path: to.to_path_buf(),
        });
    }
    fs::rename(from, to).map_err(|e| Error::io(from, e))?;
    Ok(())
}

/// Direct entries of `dir`, sorted lexicographically by file name.
///
/// The OS enumeration order is not stable across platforms or runs;
/// sorting keeps traversal and reports deterministic.
pub fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        entries.push(entry.map_err(|e| Error::io(dir, e))?);
    }
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
