//! Typed error definitions for fuzzy_sort.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Two tiers: `FuzzySortError` covers fatal run-level failures (bad roots,
//! interrupt), `RelocateError` covers per-file move failures that are
//! reported inline and never abort the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzySortError {
    #[error("{role} root does not exist: {path}")]
    RootMissing { role: &'static str, path: PathBuf },

    #[error("{role} root is not a directory: {path}")]
    RootNotDirectory { role: &'static str, path: PathBuf },

    #[error("{role} root is not readable: {path}: {reason}")]
    RootUnreadable {
        role: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("source and target roots resolve to the same path: {0}")]
    RootsIdentical(PathBuf),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FuzzySortError {
    /// Stable machine-readable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            FuzzySortError::RootMissing { .. } => "root_missing",
            FuzzySortError::RootNotDirectory { .. } => "root_not_directory",
            FuzzySortError::RootUnreadable { .. } => "root_unreadable",
            FuzzySortError::RootsIdentical(_) => "roots_identical",
            FuzzySortError::Interrupted => "interrupted",
        }
    }
}

/// Per-file relocation failure. Scoped to a single file: callers record it in
/// that file's outcome and continue with the rest.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("destination already exists and is a different file: {0}")]
    DestinationOccupied(PathBuf),

    #[error("source file disappeared since listing: {0}")]
    SourceMissing(PathBuf),

    #[error("source is not under the source root: {0}")]
    OutsideRoot(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RelocateError {
    pub fn code(&self) -> &'static str {
        match self {
            RelocateError::DestinationOccupied(_) => "destination_occupied",
            RelocateError::SourceMissing(_) => "source_missing",
            RelocateError::OutsideRoot(_) => "outside_root",
            RelocateError::Io(_) => "io",
        }
    }
}
