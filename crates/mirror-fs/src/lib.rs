//! Filesystem primitives for Mirror Backup
//!
//! Provides metadata snapshots, marker naming, and the copy/rename
//! operations the mirror engine is built on.

pub mod error;
pub mod io;
pub mod marker;
pub mod meta;

pub use error::{Error, Result};
pub use io::{copy_with_attributes, ensure_dir, rename_exclusive, sorted_entries};
pub use marker::{MARKER_PREFIX, MarkerKind, is_hidden_name, is_marker_name};
pub use meta::EntryMeta;
