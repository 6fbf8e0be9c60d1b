//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - SOURCE and TARGET are required positionals except for --print-config.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the fuzzy_sort library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Recursively fuzzy-match files from a source tree against a target tree"
)]
pub struct Args {
    /// Source folder whose files are classified and optionally sorted.
    #[arg(
        value_name = "SOURCE",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub source: Option<PathBuf>,

    /// Target folder whose filenames sources are matched against.
    #[arg(
        value_name = "TARGET",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub target: Option<PathBuf>,

    /// Minimum similarity score for a target to count as a match.
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=100),
        help = "Minimum similarity score (0-100) for a match"
    )]
    pub threshold: Option<u8>,

    /// Report only unmatched sources. Matches are still computed (relocation
    /// needs them); only their report lines are suppressed.
    #[arg(long, help = "Report only source files with no match")]
    pub unmatched_only: bool,

    /// Sort source files into found/not-found subtrees under the source root.
    #[arg(long, help = "Move matched files to 'found' and unmatched to 'not-found'")]
    pub relocate: bool,

    /// Dry-run: log planned moves but do not modify the filesystem.
    #[arg(long, help = "Show what would be moved, but do not modify files")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where fuzzy_sort will look for the config file (or FUZZY_SORT_CONFIG if set), then exit.
    #[arg(
        long,
        help = "Print the config file location used by fuzzy_sort and exit"
    )]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(t) = self.threshold {
            cfg.threshold = t;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.unmatched_only {
            cfg.unmatched_only = true;
        }
        if self.relocate {
            cfg.relocate = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
