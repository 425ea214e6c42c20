//! Pre-run validation of source roots.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

/// Check every source root before any mutation happens.
///
/// Each root must exist, be a directory, be readable, carry a resolvable
/// base name, and appear at most once. The first violation aborts the
/// whole run, so a job either starts cleanly or not at all.
///
/// Duplicates are detected by textual path equality (after the CLI's
/// trailing-separator stripping); `a` and `./a` are distinct on purpose.
pub fn validate_sources(sources: &[PathBuf]) -> Result<()> {
    let mut seen = HashSet::new();

    for source in sources {
        if !source.exists() {
            return Err(Error::SourceMissing {
                path: source.clone(),
            });
        }
        if !source.is_dir() {
            return Err(Error::SourceNotADirectory {
                path: source.clone(),
            });
        }
        if let Err(e) = fs::read_dir(source) {
            return Err(Error::SourceUnreadable {
                path: source.clone(),
                source: e,
            });
        }
        if source.file_name().is_none() {
            return Err(Error::SourceNameUnresolved {
                path: source.clone(),
            });
        }
        if !seen.insert(source.clone()) {
            return Err(Error::DuplicateSource {
                path: source.clone(),
            });
        }
    }

    Ok(())
}
