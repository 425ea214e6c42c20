//! The recursive mirror traversal.
//!
//! Each directory pair goes through three stages: ensure the destination
//! directory exists, reconcile the live source entries (files are copied,
//! versioned, or skipped; subdirectories recurse), then mark destination
//! files whose source counterpart disappeared. The deletion pass for a
//! directory never starts before its live entries, including completed
//! subdirectory recursions, are done.

use std::ffi::OsStr;
use std::path::Path;

use mirror_fs::{EntryMeta, MarkerKind, is_hidden_name, is_marker_name};

use crate::report::MirrorReport;
use crate::validate::validate_sources;
use crate::{Error, MirrorJob, MirrorOptions, Result};

/// Single-threaded engine that replicates source trees beneath a
/// destination root, versioning changed files and marking deletions via
/// renames.
///
/// The engine owns the destination tree while it runs; concurrent
/// invocations against the same destination are not supported and there
/// is no locking. Source trees are only ever read.
pub struct MirrorEngine {
    options: MirrorOptions,
}

impl MirrorEngine {
    /// Create an engine with the given options.
    pub fn new(options: MirrorOptions) -> Self {
        Self { options }
    }

    /// Run `job` to completion.
    ///
    /// Every source root is validated first; no mutation happens unless
    /// all of them pass. After that, the first I/O failure aborts the run
    /// and leaves prior mutations in place. Completed portions reconcile
    /// as unchanged on a rerun.
    pub fn execute(&self, job: &MirrorJob) -> Result<MirrorReport> {
        validate_sources(&job.sources)?;

        let mut report = MirrorReport::begin();
        self.ensure_dir(&job.dest_root)?;

        for source in &job.sources {
            let name = source
                .file_name()
                .ok_or_else(|| Error::SourceNameUnresolved {
                    path: source.clone(),
                })?;
            if self.options.skip_hidden && is_hidden_name(&name.to_string_lossy()) {
                tracing::debug!(source = %source.display(), "hidden source root, skipped");
                continue;
            }
            self.mirror_directory(source, &job.dest_root.join(name), &mut report)?;
        }

        Ok(report.finish())
    }

    fn mirror_directory(
        &self,
        src_dir: &Path,
        dest_dir: &Path,
        report: &mut MirrorReport,
    ) -> Result<()> {
        tracing::debug!(src = %src_dir.display(), dest = %dest_dir.display(), "processing directory");
        self.ensure_dir(dest_dir)?;

        for entry in mirror_fs::sorted_entries(src_dir)? {
            let name = entry.file_name();
            let hidden = is_hidden_name(&name.to_string_lossy());
            let src_path = entry.path();

            if src_path.is_dir() {
                if self.options.skip_hidden && hidden {
                    tracing::debug!(dir = %src_path.display(), "hidden directory, skipped");
                    continue;
                }
                self.mirror_directory(&src_path, &dest_dir.join(&name), report)?;
            } else {
                if self.options.skip_hidden && hidden {
                    tracing::debug!(file = %src_path.display(), "hidden file, skipped");
                    continue;
                }
                self.reconcile_file(&src_path, dest_dir, &name, report)?;
            }
        }

        self.mark_deleted(src_dir, dest_dir, report)
    }

    /// Decide between the "new file", "changed file", and "skipped"
    /// events for one source file, and apply the outcome.
    fn reconcile_file(
        &self,
        src_file: &Path,
        dest_dir: &Path,
        name: &OsStr,
        report: &mut MirrorReport,
    ) -> Result<()> {
        let dest_file = dest_dir.join(name);

        if !dest_file.exists() {
            tracing::info!(file = %dest_file.display(), "new file");
            if !self.options.dry_run {
                mirror_fs::copy_with_attributes(src_file, &dest_file)?;
            }
            report.copied += 1;
            return Ok(());
        }

        let src_meta = EntryMeta::from_path(src_file)?;
        let dest_meta = EntryMeta::from_path(&dest_file)?;
        if src_meta == dest_meta {
            tracing::debug!(file = %dest_file.display(), "unchanged, skipped");
            report.skipped += 1;
            return Ok(());
        }

        if self.options.skip_backup {
            tracing::info!(file = %dest_file.display(), "changed file");
        } else {
            let backup = dest_dir.join(MarkerKind::Backup.apply(name));
            tracing::info!(file = %dest_file.display(), backup = %backup.display(), "changed file, backing up");
            if !self.options.dry_run {
                mirror_fs::rename_exclusive(&dest_file, &backup)?;
            }
            report.backed_up += 1;
        }

        if !self.options.dry_run {
            mirror_fs::copy_with_attributes(src_file, &dest_file)?;
        }
        report.updated += 1;
        Ok(())
    }

    /// Rename destination files with no source counterpart to `~del.`
    /// markers. Only plain files at this directory level are scanned;
    /// marker names are exempt, and hidden files are exempt while
    /// `skip_hidden` is set.
    fn mark_deleted(
        &self,
        src_dir: &Path,
        dest_dir: &Path,
        report: &mut MirrorReport,
    ) -> Result<()> {
        if !dest_dir.exists() {
            // Dry run over a destination that was never created
            return Ok(());
        }

        for entry in mirror_fs::sorted_entries(dest_dir)? {
            let name = entry.file_name();
            let display = name.to_string_lossy();
            let dest_path = entry.path();

            if dest_path.is_dir() || is_marker_name(&display) {
                continue;
            }
            if self.options.skip_hidden && is_hidden_name(&display) {
                continue;
            }
            if src_dir.join(&name).exists() {
                continue;
            }

            let marker = dest_dir.join(MarkerKind::Deleted.apply(&name));
            tracing::info!(file = %dest_path.display(), marker = %marker.display(), "marked as deleted");
            if !self.options.dry_run {
                mirror_fs::rename_exclusive(&dest_path, &marker)?;
            }
            report.marked_deleted += 1;
        }

        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if self.options.dry_run {
            if path.exists() && !path.is_dir() {
                return Err(mirror_fs::Error::NotADirectory {
                    path: path.to_path_buf(),
                }
                .into());
            }
            return Ok(());
        }
        mirror_fs::ensure_dir(path)?;
        Ok(())
    }
}
