//! Matching one source against all targets, and classifying a whole listing.
//!
//! Cost is O(|sources| x |targets|) basename comparisons. Similarity admits
//! no cheap metric pruning in general, so there is no index; this is the
//! documented scaling limit of the tool. The per-source work is independent,
//! so classification fans out across a rayon pool; the target slice is shared
//! immutably and the scorer is pure, so no locking is involved.

use rayon::prelude::*;

use super::score::score;
use super::{Classification, Classified, MatchCandidate};
use crate::walk::FileEntry;

/// Score `source` against every target basename and keep those at or above
/// `threshold`. All targets are scored: several may qualify and all must be
/// reported. Directory structure never influences the score.
pub fn match_candidates(
    source: &FileEntry,
    targets: &[FileEntry],
    threshold: u8,
) -> Vec<MatchCandidate> {
    targets
        .iter()
        .filter_map(|target| {
            let s = score(&source.name, &target.name);
            (s >= threshold).then(|| MatchCandidate {
                target: target.clone(),
                score: s,
            })
        })
        .collect()
}

/// Classify every source against the target listing. Result order matches
/// the source listing order even though the work runs in parallel.
pub fn classify(sources: &[FileEntry], targets: &[FileEntry], threshold: u8) -> Vec<Classified> {
    classify_with(sources, targets, threshold, || {})
}

/// Like [`classify`], invoking `tick` after each source is classified.
/// The binary hangs a progress bar off this hook.
pub fn classify_with<F>(
    sources: &[FileEntry],
    targets: &[FileEntry],
    threshold: u8,
    tick: F,
) -> Vec<Classified>
where
    F: Fn() + Sync,
{
    sources
        .par_iter()
        .map(|source| {
            let candidates = match_candidates(source, targets, threshold);
            let outcome = if candidates.is_empty() {
                Classification::Unmatched
            } else {
                Classification::Matched(candidates)
            };
            tick();
            Classified {
                source: source.clone(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(path: &str) -> FileEntry {
        FileEntry::new(PathBuf::from(path))
    }

    #[test]
    fn basenames_compared_never_full_paths() {
        let source = entry("/src/deep/nested/Song.mp3");
        let targets = [entry("/tgt/elsewhere/Song.mp3")];
        let found = match_candidates(&source, &targets, 100);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 100);
    }

    #[test]
    fn all_qualifying_targets_kept_in_order() {
        let source = entry("/src/Song.mp3");
        let targets = [
            entry("/tgt/a/Song.mp3"),
            entry("/tgt/nothing-alike.wav"),
            entry("/tgt/b/Song.mp3"),
        ];
        let found = match_candidates(&source, &targets, 99);
        let paths: Vec<_> = found.iter().map(|c| c.target.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tgt/a/Song.mp3"),
                PathBuf::from("/tgt/b/Song.mp3")
            ]
        );
    }

    #[test]
    fn zero_threshold_matches_everything() {
        let sources = [entry("/src/a.mp3"), entry("/src/b.flac")];
        let targets = [entry("/tgt/x.wav"), entry("/tgt/y.ogg")];
        for c in classify(&sources, &targets, 0) {
            match c.outcome {
                Classification::Matched(cands) => assert_eq!(cands.len(), targets.len()),
                Classification::Unmatched => panic!("threshold 0 must match"),
            }
        }
    }

    #[test]
    fn result_order_matches_source_order() {
        let sources: Vec<_> = (0..64).map(|i| entry(&format!("/src/f{i}.txt"))).collect();
        let targets = [entry("/tgt/f0.txt")];
        let classified = classify(&sources, &targets, 0);
        for (c, s) in classified.iter().zip(&sources) {
            assert_eq!(c.source.path, s.path);
        }
    }
}
