//! Job description and options for a mirror run.

use std::path::PathBuf;

/// Per-run behavior switches.
///
/// Threaded immutably through the traversal; never process-global, so
/// independent jobs can carry independent options.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorOptions {
    /// Overwrite changed files without creating a `~bak.` marker first
    pub skip_backup: bool,
    /// Ignore hidden files and directories entirely
    pub skip_hidden: bool,
    /// Classify and count every action without touching the filesystem
    pub dry_run: bool,
}

/// One mirror run: a destination root plus the ordered source roots to
/// replicate beneath it.
///
/// Jobs are ephemeral; every run re-reads the filesystem from scratch and
/// no state persists between runs beyond the destination tree itself.
#[derive(Debug, Clone)]
pub struct MirrorJob {
    /// Directory the mirrored trees are placed under
    pub dest_root: PathBuf,
    /// Source roots, mirrored in input order
    pub sources: Vec<PathBuf>,
}

impl MirrorJob {
    /// Create a new job.
    pub fn new(dest_root: impl Into<PathBuf>, sources: Vec<PathBuf>) -> Self {
        Self {
            dest_root: dest_root.into(),
            sources,
        }
    }
}
