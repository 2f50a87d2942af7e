//! Error types for the revtrace engine.
//!
//! Uses thiserror for derive macros. The engine is deliberately hard to
//! fail: malformed diff content is tolerated rather than rejected, so the
//! only errors surfaced here are caller mistakes and collaborator failures.

use thiserror::Error;

/// Main error type for revtrace operations.
#[derive(Error, Debug)]
pub enum RevtraceError {
    /// Caller passed arguments that cannot produce a meaningful result
    /// (for example a chain trace whose start is not newer than its end).
    #[error("{0}")]
    Usage(String),

    /// A revision id was not found in the revision list supplied by the caller.
    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    /// The diff provider could not produce a diff between two revisions.
    #[error("diff unavailable between {from} and {to}: {reason}")]
    DiffUnavailable {
        from: String,
        to: String,
        reason: String,
    },
}

/// Result type alias for revtrace operations.
pub type Result<T> = std::result::Result<T, RevtraceError>;
