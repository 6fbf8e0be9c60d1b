//! Filename matching: similarity scoring and source classification.

mod classify;
mod score;

pub use classify::{classify, classify_with, match_candidates};
pub use score::score;

use crate::walk::FileEntry;

/// A target that scored at or above the threshold for one source file.
/// Candidates keep the order targets were scored in; no tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub target: FileEntry,
    pub score: u8,
}

/// Outcome for one source file. Exactly one of the two holds: a source with
/// zero qualifying candidates is `Unmatched`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched(Vec<MatchCandidate>),
    Unmatched,
}

impl Classification {
    pub fn is_matched(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}

/// A source file paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub source: FileEntry,
    pub outcome: Classification,
}
