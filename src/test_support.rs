//! Shared fixtures for engine tests.

use chrono::{TimeZone, Utc};

use crate::revision::Revision;

/// Revision with deterministic metadata derived from its id.
pub(crate) fn rev(id: &str) -> Revision {
    Revision::new(
        id,
        format!("author-of-{id}"),
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
        format!("commit {id}"),
    )
}
