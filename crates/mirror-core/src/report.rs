//! Run report with per-event counts.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counts of every reconciliation event in one run.
///
/// Serializable so callers can emit it for scripting (`--json` in the
/// CLI).
#[derive(Debug, Clone, Serialize)]
pub struct MirrorReport {
    /// Files copied that had no destination counterpart
    pub copied: u64,
    /// Files overwritten because size or mtime differed
    pub updated: u64,
    /// `~bak.` markers created before overwrites
    pub backed_up: u64,
    /// Files left untouched because size and mtime matched
    pub skipped: u64,
    /// Destination files renamed to `~del.` markers
    pub marked_deleted: u64,
    /// When the run started
    pub started: DateTime<Utc>,
    /// When the run finished
    pub finished: DateTime<Utc>,
}

impl MirrorReport {
    pub(crate) fn begin() -> Self {
        let now = Utc::now();
        Self {
            copied: 0,
            updated: 0,
            backed_up: 0,
            skipped: 0,
            marked_deleted: 0,
            started: now,
            finished: now,
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.finished = Utc::now();
        self
    }

    /// Whether the run changed nothing on the destination side.
    pub fn is_noop(&self) -> bool {
        self.copied == 0 && self.updated == 0 && self.backed_up == 0 && self.marked_deleted == 0
    }
}
