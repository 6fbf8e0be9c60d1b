//! Core library for `fuzzy_sort`.
//!
//! Walks a source tree and a target tree, scores every source filename
//! against every target filename, classifies sources as matched or
//! unmatched, and can sort the source tree into found/not-found subtrees
//! that preserve relative paths.
//!
//! The scoring loop is O(|sources| x |targets|); similarity is not a metric
//! that admits cheap pruning, so there is no index. Classification
//! parallelizes across sources (the target list is immutable and the scorer
//! pure), which is the only concurrency the core needs.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod matcher;
pub mod output;
pub mod report;
pub mod shutdown;
pub mod walk;

pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
    validate_roots, Config, LogLevel,
};
pub use errors::{FuzzySortError, RelocateError};
pub use fs_ops::{relocate, MoveOutcome, RelocationOutcome};
pub use matcher::{
    classify, classify_with, match_candidates, score, Classification, Classified, MatchCandidate,
};
pub use walk::{list_files, FileEntry};
