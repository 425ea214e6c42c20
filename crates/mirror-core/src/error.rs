//! Error types for mirror-core

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source root does not exist
    #[error("Source directory {path} does not exist")]
    SourceMissing { path: PathBuf },

    /// Source root exists but is not a directory
    #[error("Source {path} is not a directory")]
    SourceNotADirectory { path: PathBuf },

    /// Source root cannot be read
    #[error("Source directory {path} is not readable: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source root appears more than once in the input list
    #[error("Source directory {path} is duplicated")]
    DuplicateSource { path: PathBuf },

    /// Source root has no base name to mirror under (e.g. `/` or `.`)
    #[error("Source directory {path} has no usable base name")]
    SourceNameUnresolved { path: PathBuf },

    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
