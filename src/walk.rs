//! Tree listing.
//! Enumerates every regular file under a root, at any depth, in whatever
//! order the underlying walk yields (not sorted).
//!
//! Notes:
//! - Symlinks are not followed (walkdir default); a symlink is not a regular
//!   file and is skipped.
//! - A missing or non-directory root is a hard error so the caller can abort
//!   before matching against a silently empty set.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::FuzzySortError;

/// A file discovered under a root: its absolute path plus derived basename.
/// Identity is the path; the basename is what similarity scoring compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// List every regular file under `root`. `role` names the root in errors
/// ("source" or "target").
pub fn list_files(root: &Path, role: &'static str) -> Result<Vec<FileEntry>> {
    if !root.exists() {
        return Err(FuzzySortError::RootMissing {
            role,
            path: root.to_path_buf(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(FuzzySortError::RootNotDirectory {
            role,
            path: root.to_path_buf(),
        }
        .into());
    }

    let entries: Vec<FileEntry> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| FileEntry::new(e.into_path()))
        .collect();

    debug!(root = %root.display(), count = entries.len(), "Listed files");
    Ok(entries)
}
