//! Filesystem operations: relocation of classified files.

mod atomic;
mod helpers;
mod relocate;

pub use relocate::{relocate, MoveOutcome, RelocationOutcome};
