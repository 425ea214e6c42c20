//! Mirror engine for Mirror Backup
//!
//! Replicates one or more source directory trees beneath a destination
//! root, preserving structure, skipping unchanged files, versioning
//! changed files via rename-to-backup, and marking files removed from the
//! source as deleted via rename. Nothing is ever erased.
//!
//! # Architecture
//!
//! `mirror-core` sits between the CLI and the filesystem layer:
//!
//! ```text
//!     CLI
//!      |
//! mirror-core   (validation, traversal, reporting)
//!      |
//!  mirror-fs    (metadata, markers, copy/rename primitives)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mirror_core::{MirrorEngine, MirrorJob, MirrorOptions, Result};
//!
//! fn mirror_home() -> Result<()> {
//!     let job = MirrorJob::new("/backups", vec!["/home/user/docs".into()]);
//!     let report = MirrorEngine::new(MirrorOptions::default()).execute(&job)?;
//!     println!("{} new files", report.copied);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod job;
pub mod report;
pub mod validate;

pub use engine::MirrorEngine;
pub use error::{Error, Result};
pub use job::{MirrorJob, MirrorOptions};
pub use report::MirrorReport;
pub use validate::validate_sources;
