//! Chained line translation across a revision history.
//!
//! One [`LineMapper`](crate::mapper::LineMapper) carries a line number
//! across a single diff; this module composes mappers over every adjacent
//! revision pair between two endpoints, so a logical line can be followed
//! across an arbitrary span of the history.

use tracing::warn;

use crate::diff::DiffDirection;
use crate::error::{Result, RevtraceError};
use crate::mapper::LineMapper;
use crate::revision::Revision;


/// External collaborator that materializes diff text between two revisions.
///
/// Implementations wrap the backend's diff command; the engine never
/// performs I/O itself. The returned lines must be a unified diff of the
/// file going from `from` (old side) to `to` (new side).
pub trait DiffProvider {
    fn diff_lines(&self, from: &Revision, to: &Revision) -> Result<Vec<String>>;
}

/// Composes per-adjacent-revision line mappings over a revision list.
///
/// The list is the file's history, newest first, as produced by the log
/// parser. Built per request; holds no state beyond the borrowed inputs.
pub struct RevisionChainTranslator<'a, P> {
    revisions: &'a [Revision],
    provider: &'a P,
}

impl<'a, P: DiffProvider> RevisionChainTranslator<'a, P> {
    pub fn new(revisions: &'a [Revision], provider: &'a P) -> Self {
        Self {
            revisions,
            provider,
        }
    }

    /// Carry `line` from `from_id` down to `to_id`.
    ///
    /// `from_id` must be strictly newer than `to_id` in the list ordering;
    /// anything else is a usage error. With `metadata_is_cheap` false the
    /// whole walk is skipped and `line` is returned unchanged: stepping
    /// through many revisions against a slow backing store is assumed too
    /// costly, so the feature degrades to a no-op.
    ///
    /// A diff that cannot be fetched or parsed mid-chain aborts the
    /// remaining steps and yields the last successfully computed value.
    /// Landing near the correct line beats failing the whole operation.
    pub fn trace(
        &self,
        from_id: &str,
        to_id: &str,
        line: usize,
        metadata_is_cheap: bool,
    ) -> Result<usize> {
        if !metadata_is_cheap {
            return Ok(line);
        }

        let from_idx = self.index_of(from_id)?;
        let to_idx = self.index_of(to_id)?;

        // Newest first, so strictly newer means a strictly smaller index.
        if from_idx >= to_idx {
            return Err(RevtraceError::Usage(format!(
                "revision {} is not newer than {}; nothing to trace",
                from_id, to_id
            )));
        }

        let mut current = line;
        for pair in self.revisions[from_idx..=to_idx].windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            let lines = match self.provider.diff_lines(newer, older) {
                Ok(lines) => lines,
                Err(err) => {
                    warn!(
                        from = %newer.id,
                        to = %older.id,
                        error = %err,
                        "chain step failed, returning last good line"
                    );
                    return Ok(current);
                }
            };
            let mapper = LineMapper::from_diff(lines.iter(), DiffDirection::Forward);
            current = mapper.translate(current);
        }

        Ok(current)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.revisions
            .iter()
            .position(|rev| rev.id == id)
            .ok_or_else(|| RevtraceError::UnknownRevision(id.to_string()))
    }
}
