//! Similarity scoring between two filenames.
//!
//! The score is the stronger of normalized Levenshtein and Jaro-Winkler,
//! scaled to [0,100]. Levenshtein alone punishes short parenthesized or
//! punctuation suffixes hard ("Song (1).mp3" vs "Song.mp3"), which is exactly
//! the drift filename matching needs to tolerate; Jaro-Winkler's shared-prefix
//! boost covers that case. Both measures are symmetric and pure, so the
//! combined score is too.

use strsim::{jaro_winkler, normalized_levenshtein};

/// Normalized similarity in [0,100]; 100 means identical strings.
pub fn score(a: &str, b: &str) -> u8 {
    let lev = normalized_levenshtein(a, b);
    let jw = jaro_winkler(a, b);
    (lev.max(jw) * 100.0).round() as u8
}
