//! Unified-diff parsing primitives.
//!
//! This module provides the structural half of the engine:
//! - Hunk header recognition (`@@ -a[,b] +c[,d] @@`)
//! - Line-by-line classification of a diff body into tagged events,
//!   with running old-side/new-side cursors, in either orientation
//!
//! The parsing is deterministic and tolerant: tool banners, VCS-specific
//! preambles, and unrecognized dialect quirks classify as `Ignored`
//! instead of failing the walk.

mod hunk;
mod walker;

#[cfg(test)]
mod tests;

pub use hunk::HunkHeader;
pub use walker::{DiffDirection, DiffEvent, DiffWalker};
