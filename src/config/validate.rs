//! Root validation logic.
//! Verifies both roots exist, are directories, and are readable, and that
//! they do not resolve to the same path. Failures here are fatal: matching
//! against a missing root would be indistinguishable from "no files".

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::FuzzySortError;

/// Validate the source and target roots before listing.
pub fn validate_roots(source: &Path, target: &Path) -> Result<()> {
    ensure_root(source, "source")?;
    ensure_root(target, "target")?;

    // Resolve symlinks so `src` and `src/../src` style aliases are caught.
    let src_real = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    let tgt_real = fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());
    if src_real == tgt_real {
        return Err(FuzzySortError::RootsIdentical(src_real).into());
    }

    info!(
        "Roots validated: source='{}' target='{}'",
        source.display(),
        target.display()
    );
    Ok(())
}

/// Ensure path exists, is a directory, and is readable.
fn ensure_root(path: &Path, role: &'static str) -> Result<()> {
    if !path.exists() {
        return Err(FuzzySortError::RootMissing {
            role,
            path: path.to_path_buf(),
        }
        .into());
    }
    if !path.is_dir() {
        return Err(FuzzySortError::RootNotDirectory {
            role,
            path: path.to_path_buf(),
        }
        .into());
    }

    // readability probe
    fs::read_dir(path).map_err(|e| FuzzySortError::RootUnreadable {
        role,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("{role} root readable: {}", path.display());
    Ok(())
}
