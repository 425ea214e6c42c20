//! CLI argument parsing using clap derive

use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use clap::Parser;

/// Mirror Backup - replicate directory trees, keeping history via renames
///
/// Copies each source directory beneath the destination root. Unchanged
/// files (same size and modification time) are skipped, changed files are
/// renamed to `~bak.<name>` before being overwritten, and files that
/// disappeared from the source are renamed to `~del.<name>`. Nothing is
/// ever deleted.
#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(author, version, about)]
pub struct Cli {
    /// Log every action taken
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite changed files without creating a ~bak. marker (-sb)
    #[arg(long, alias = "sb")]
    pub skip_backup: bool,

    /// Ignore hidden files and directories entirely (-sh)
    #[arg(long, alias = "sh")]
    pub skip_hidden: bool,

    /// Classify and count actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Destination root the mirrored trees are placed under
    pub dest: PathBuf,

    /// Source directories to mirror, in order
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
}

/// Rewrite the legacy flag spellings `-sb` and `-sh` to their long forms.
///
/// Only leading flag tokens are rewritten; once the first positional
/// argument appears, the rest passes through untouched. A stray `-sb`
/// after a positional therefore surfaces as an unknown argument, which
/// matches the legacy rule that flags must precede the paths.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = Vec::new();

    // Program name passes through as-is
    if let Some(program) = iter.next() {
        normalized.push(program);
    }

    let mut in_flags = true;
    for arg in iter {
        if in_flags {
            match arg.to_str() {
                Some("-sb") => {
                    normalized.push("--skip-backup".into());
                    continue;
                }
                Some("-sh") => {
                    normalized.push("--skip-hidden".into());
                    continue;
                }
                Some(s) if s.starts_with('-') => {}
                _ => in_flags = false,
            }
        }
        normalized.push(arg);
    }

    normalized
}

/// Strip trailing path separators from a source argument, so the root's
/// base name resolves (`data/` mirrors as `data`).
pub fn strip_trailing_separator(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    let trimmed = s.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() {
        // The argument was the root directory itself
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}
