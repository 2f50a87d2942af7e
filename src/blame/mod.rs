//! Merging uncommitted local edits into per-line attribution data.
//!
//! Annotate output describes a committed revision; the working copy may
//! already differ from it. [`merge_local_edits`] replays the diff between
//! the two positionally against the attribution sequence, so locally
//! changed lines show up attributed to the local pseudo-revision without
//! ever comparing attribution text to diff text. That matters because
//! attribution records carry extra formatting (author/revision prefixes)
//! that would never textually match the bare diff lines.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::diff::{DiffDirection, DiffEvent, DiffWalker};
use crate::revision::Revision;


/// Attribution for one source line of a specific file revision.
///
/// Held in an ordered sequence addressed by 1-based position; the sequence
/// length always equals the line count of the content it represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRecord {
    /// Revision that last touched the line.
    pub revision: Revision,
    /// The source line itself.
    pub source: String,
    /// Presentation text (revision/author prefix plus source), as built by
    /// the annotate-output parser.
    pub display: String,
}

impl AttributionRecord {
    pub fn new(
        revision: Revision,
        source: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            revision,
            source: source.into(),
            display: display.into(),
        }
    }

    /// Record for a line that exists only in the working copy.
    pub fn local(source: impl Into<String>) -> Self {
        let source = source.into();
        let display = source.clone();
        Self {
            revision: Revision::local(),
            source,
            display,
        }
    }
}

/// Replay a diff positionally against a base attribution sequence.
///
/// `diff_lines` is the diff from the attributed revision (old side) to the
/// current working-copy content (new side), in forward orientation.
///
/// The walk keeps its own cursor into the working sequence, distinct from
/// the diff's old/new counters: in-place edits shift every later position,
/// so the old-side counters stop being valid indices as soon as the first
/// hunk with a net length change has been applied. Each hunk header
/// re-seats the cursor at the hunk's new-side begin, which is exactly the
/// hunk's position in the working copy once the hunks above it have been
/// replayed. A removal deletes at the cursor and leaves it pointing at the
/// line that slid into the slot; an insertion places a local-revision
/// record at the cursor and advances past it; a context line just
/// advances. Until the first hunk header the cursor is inactive and
/// nothing mutates.
pub fn merge_local_edits<I>(
    base: impl IntoIterator<Item = AttributionRecord>,
    diff_lines: I,
) -> Vec<AttributionRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records: Vec<AttributionRecord> = base.into_iter().collect();
    // 1-based position into `records`; None before the first hunk header.
    let mut cursor: Option<usize> = None;

    for event in DiffWalker::new(diff_lines.into_iter(), DiffDirection::Forward) {
        match event {
            DiffEvent::Hunk(header) => {
                // A zero-count range means "the line after this position"
                // (GNU diff convention), so the hunk's first edit lands one
                // line further down.
                let begin = if header.new_count == 0 {
                    header.new_begin + 1
                } else {
                    header.new_begin
                };
                cursor = Some(begin);
            }
            DiffEvent::Removed { old_line, .. } => {
                let Some(pos) = cursor else { continue };
                if pos >= 1 && pos <= records.len() {
                    records.remove(pos - 1);
                } else {
                    warn!(pos, old_line, "removal outside attribution sequence, skipped");
                }
                // The next record slides into the removed slot; the cursor
                // stays put.
            }
            DiffEvent::Added { text, .. } => {
                let Some(pos) = cursor else { continue };
                if pos >= 1 && pos <= records.len() + 1 {
                    records.insert(pos - 1, AttributionRecord::local(text));
                    cursor = Some(pos + 1);
                } else {
                    warn!(pos, "insertion outside attribution sequence, skipped");
                }
            }
            DiffEvent::Context { .. } => {
                if let Some(pos) = cursor {
                    cursor = Some(pos + 1);
                }
            }
            DiffEvent::Ignored => {}
        }
    }

    records
}
