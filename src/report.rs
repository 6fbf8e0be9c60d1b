//! Human-readable reporting over classification and relocation results.
//!
//! Reporting goes through a sink trait so the console printer stays an
//! injected detail: the library never owns global color or terminal state,
//! and tests can collect lines instead of parsing stdout.

use crate::fs_ops::{MoveOutcome, RelocationOutcome};
use crate::matcher::{Classification, Classified};
use crate::output as out;

/// Where report lines go. The binary installs [`ConsoleSink`]; tests may
/// install a collecting sink.
pub trait ReportSink {
    fn matched(&self, classified: &Classified);
    fn unmatched(&self, classified: &Classified);
    fn relocation(&self, outcome: &RelocationOutcome);
    fn summary(&self, line: &str);
}

/// Emit one block per source. `unmatched_only` suppresses matched blocks;
/// the classification itself is untouched.
pub fn emit(sink: &dyn ReportSink, classified: &[Classified], unmatched_only: bool) {
    for c in classified {
        match &c.outcome {
            Classification::Matched(_) => {
                if !unmatched_only {
                    sink.matched(c);
                }
            }
            Classification::Unmatched => sink.unmatched(c),
        }
    }
}

/// Report every relocation outcome and return (moved, failed) counts.
/// Failures are inline lines, never fatal.
pub fn emit_relocations(sink: &dyn ReportSink, outcomes: &[RelocationOutcome]) -> (usize, usize) {
    let mut moved = 0;
    let mut failed = 0;
    for o in outcomes {
        match o.outcome {
            MoveOutcome::Moved => moved += 1,
            MoveOutcome::Failed(_) => failed += 1,
            MoveOutcome::AlreadyInPlace | MoveOutcome::DryRun => {}
        }
        sink.relocation(o);
    }
    (moved, failed)
}

/// Colored console sink, the production reporting target.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn matched(&self, classified: &Classified) {
        if let Classification::Matched(candidates) = &classified.outcome {
            out::print_match_header(&classified.source.name);
            for c in candidates {
                out::print_match_line(&c.target.path.display().to_string(), c.score);
            }
        }
    }

    fn unmatched(&self, classified: &Classified) {
        out::print_no_match(&classified.source.name);
    }

    fn relocation(&self, outcome: &RelocationOutcome) {
        match &outcome.outcome {
            MoveOutcome::Failed(e) => out::print_error(&format!(
                "error moving {}: {}",
                outcome.source.display(),
                e
            )),
            MoveOutcome::DryRun => out::print_info(&format!(
                "dry-run: would move '{}' -> '{}'",
                outcome.source.display(),
                outcome.dest.display()
            )),
            MoveOutcome::Moved | MoveOutcome::AlreadyInPlace => {}
        }
    }

    fn summary(&self, line: &str) {
        out::print_info(line);
    }
}
