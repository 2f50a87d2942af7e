//! Revision metadata.
//!
//! A [`Revision`] is an opaque identifier plus the metadata a log parser
//! extracts for it. Revisions are immutable once built; ordering lives in
//! the caller's revision list (newest first), not in the struct itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel id for the pseudo-revision that attributes uncommitted local edits.
pub const LOCAL_REVISION_ID: &str = "*local*";

/// One entry of a file's revision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Backend-specific identifier (e.g. "1.42", a 40-char hash, "r1003").
    pub id: String,
    /// Author as reported by the backend's log output.
    pub author: String,
    /// Commit time, normalized to UTC by the log parser.
    pub timestamp: DateTime<Utc>,
    /// Log message.
    pub comment: String,
}

impl Revision {
    /// Build a revision from log-parser output.
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            timestamp,
            comment: comment.into(),
        }
    }

    /// The pseudo-revision representing uncommitted local changes.
    ///
    /// Used to attribute lines that exist in the working copy but in no
    /// committed revision. Its timestamp is the moment of the call, since
    /// local edits have no commit time.
    pub fn local() -> Self {
        Self {
            id: LOCAL_REVISION_ID.to_string(),
            author: String::new(),
            timestamp: Utc::now(),
            comment: String::new(),
        }
    }

    /// Whether this is the local pseudo-revision.
    pub fn is_local(&self) -> bool {
        self.id == LOCAL_REVISION_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_revision_is_recognizable() {
        let rev = Revision::local();
        assert!(rev.is_local());
        assert_eq!(rev.id, LOCAL_REVISION_ID);
    }

    #[test]
    fn test_ordinary_revision_is_not_local() {
        let rev = Revision::new(
            "1.7",
            "alice",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            "fix overflow",
        );
        assert!(!rev.is_local());
    }

    #[test]
    fn test_revision_serializes_with_stable_field_names() {
        let rev = Revision::new(
            "abc123",
            "bob",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            "initial import",
        );
        let json = serde_json::to_value(&rev).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["author"], "bob");
        assert_eq!(json["comment"], "initial import");
    }
}
