//! revtrace: the VCS-agnostic core of a revision-history browser.
//!
//! The surrounding application talks to version-control back ends
//! (diff/log/annotate commands) and drives the presentation; this crate
//! holds the part that needs careful reasoning:
//!
//! - [`diff`] parses unified-diff hunk structure and classifies every
//!   line of a diff body, maintaining old-side/new-side cursors.
//! - [`mapper`] builds a line-number correspondence between two revisions
//!   from context-line anchors and answers point queries by lookup,
//!   extrapolation, or interpolation.
//! - [`chain`] composes such correspondences across a revision history to
//!   follow one logical line through many revisions.
//! - [`blame`] replays a diff positionally against per-line attribution
//!   data, merging uncommitted local edits into annotate output.
//!
//! Everything is synchronous and side-effect-free apart from `tracing`
//! events; diff and log retrieval happen outside and arrive as
//! already-materialized text. Each structure is built per request and
//! discarded, so concurrent calls on independent data need no locking,
//! and cancellation/staleness is the caller's concern.

pub mod blame;
pub mod chain;
pub mod diff;
pub mod error;
pub mod mapper;
pub mod revision;

#[cfg(test)]
mod test_support;

pub use blame::{merge_local_edits, AttributionRecord};
pub use chain::{DiffProvider, RevisionChainTranslator};
pub use diff::{DiffDirection, DiffEvent, DiffWalker, HunkHeader};
pub use error::{Result, RevtraceError};
pub use mapper::LineMapper;
pub use revision::{Revision, LOCAL_REVISION_ID};
