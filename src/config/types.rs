//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use super::{FOUND_DIR_DEFAULT, NOT_FOUND_DIR_DEFAULT, THRESHOLD_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the matcher and relocator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum similarity score (0-100) for a target to count as a match
    pub threshold: u8,
    /// Name of the matched-files subtree created under the source root
    pub found_dir: String,
    /// Name of the unmatched-files subtree created under the source root
    pub not_found_dir: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report only unmatched sources (matches still computed)
    pub unmatched_only: bool,
    /// If true, sort files into the found/not-found subtrees
    pub relocate: bool,
    /// If true, print planned moves but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD_DEFAULT,
            found_dir: FOUND_DIR_DEFAULT.to_string(),
            not_found_dir: NOT_FOUND_DIR_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            // paths::default_log_path() returns Result<PathBuf>; store Some(path) on success.
            log_file: paths::default_log_path().ok(),
            unmatched_only: false,
            relocate: false,
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config with an explicit threshold; other fields use defaults.
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }
}
