//! Relocation of classified files into found/not-found subtrees.
//!
//! Destination = partition root + the file's path relative to the source
//! root; the relative component is preserved verbatim. Attempts an atomic
//! rename first and falls back to copy+remove when the rename fails (e.g.
//! cross-filesystem). Failures are captured per file: one bad move never
//! stops the rest of the batch.
//!
//! Directory creation uses create_dir_all, which tolerates "already exists" —
//! no check-then-create race when moves run concurrently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::errors::RelocateError;
use crate::matcher::Classified;
use crate::shutdown;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;

/// What happened to one file.
#[derive(Debug)]
pub enum MoveOutcome {
    Moved,
    /// Source already sat at its computed destination; filesystem untouched.
    AlreadyInPlace,
    DryRun,
    Failed(RelocateError),
}

/// One file's relocation record: where it was, where it was headed, and how
/// the move went.
#[derive(Debug)]
pub struct RelocationOutcome {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub outcome: MoveOutcome,
}

/// Move every classified file under `found_root` or `not_found_root`
/// according to its partition, preserving the path relative to `source_root`.
/// Returns one outcome per processed file. Stops early (remaining files
/// unprocessed) only on a shutdown request.
pub fn relocate(
    classified: &[Classified],
    source_root: &Path,
    found_root: &Path,
    not_found_root: &Path,
    dry_run: bool,
) -> Vec<RelocationOutcome> {
    let mut outcomes = Vec::with_capacity(classified.len());

    for c in classified {
        if shutdown::is_requested() {
            warn!("Shutdown requested; leaving remaining files in place");
            break;
        }

        let dest_root = if c.outcome.is_matched() {
            found_root
        } else {
            not_found_root
        };

        let rel = match c.source.path.strip_prefix(source_root) {
            Ok(rel) => rel,
            Err(_) => {
                outcomes.push(RelocationOutcome {
                    source: c.source.path.clone(),
                    dest: dest_root.to_path_buf(),
                    outcome: MoveOutcome::Failed(RelocateError::OutsideRoot(
                        c.source.path.clone(),
                    )),
                });
                continue;
            }
        };
        let dest = dest_root.join(rel);

        let outcome = match move_one(&c.source.path, &dest, dry_run) {
            Ok(o) => o,
            Err(e) => {
                error!(code = e.code(), error = %e, path = %c.source.path.display(), "Relocation failed");
                MoveOutcome::Failed(e)
            }
        };
        outcomes.push(RelocationOutcome {
            source: c.source.path.clone(),
            dest,
            outcome,
        });
    }

    outcomes
}

/// Move a single file to `dest`, creating intermediate directories.
fn move_one(src: &Path, dest: &Path, dry_run: bool) -> Result<MoveOutcome, RelocateError> {
    if src == dest {
        info!(path = %src.display(), "Already at destination; nothing to do");
        return Ok(MoveOutcome::AlreadyInPlace);
    }

    if dry_run {
        info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
        return Ok(MoveOutcome::DryRun);
    }

    match fs::symlink_metadata(src) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RelocateError::SourceMissing(src.to_path_buf()));
        }
        Err(e) => {
            return Err(io_error_with_help("stat source", src)(e).into());
        }
    }

    if dest.exists() {
        // src != dest here, so whatever sits at dest is a different file.
        return Err(RelocateError::DestinationOccupied(dest.to_path_buf()));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(io_error_with_help("create destination directory", parent))?;
    }

    match try_atomic_move(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveOutcome::Moved)
        }
        Err(e) => {
            #[cfg(unix)]
            let hint: &str = match e.raw_os_error() {
                Some(code) if code == libc::EXDEV => "cross-filesystem; will copy instead",
                Some(code) if code == libc::EACCES || code == libc::EPERM => {
                    "permission denied; check destination perms"
                }
                _ => "falling back to copy",
            };

            #[cfg(not(unix))]
            let hint: &str = match e.kind() {
                io::ErrorKind::PermissionDenied => "permission denied; check destination perms",
                _ => "falling back to copy",
            };

            warn!(error = %e, hint, "Atomic rename failed, using copy+remove");

            fs::copy(src, dest).map_err(io_error_with_help("copy file", dest))?;
            fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            info!(src = %src.display(), dest = %dest.display(), "Copied and removed original");
            Ok(MoveOutcome::Moved)
        }
    }
}
