//! Line-number correspondence between two revisions of a file.
//!
//! A [`LineMapper`] accumulates anchor points from the context lines of a
//! diff (both cursors advance in lock-step on a context line, so the pair
//! at that moment is a true old→new correspondence) and answers point
//! queries by exact lookup, extrapolation, or interpolation.

use std::collections::BTreeMap;

use tracing::warn;

use crate::diff::{DiffDirection, DiffEvent, DiffWalker};


/// Sparse old-line → new-line correspondence for one diff.
///
/// Keys and values are each strictly increasing in iteration order, a
/// consequence of monotonic hunk ordering in well-formed diffs. Built
/// fresh per diff and discarded after use.
#[derive(Debug, Default)]
pub struct LineMapper {
    anchors: BTreeMap<usize, usize>,
}

impl LineMapper {
    /// Empty mapper; `translate` is the identity until anchors are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapper from the context lines of a diff.
    pub fn from_diff<I>(lines: I, direction: DiffDirection) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut mapper = Self::new();
        for event in DiffWalker::new(lines.into_iter(), direction) {
            if let DiffEvent::Context {
                old_line, new_line, ..
            } = event
            {
                mapper.add_mapping(old_line, new_line);
            }
        }
        mapper
    }

    /// Insert an anchor point.
    pub fn add_mapping(&mut self, old_line: usize, new_line: usize) {
        self.anchors.insert(old_line, new_line);
    }

    /// Map an old-side line number to the new side.
    ///
    /// - Exact anchor: its mapped value.
    /// - No anchor at or before `old_line`: identity (the region precedes
    ///   any known hunk and is assumed untouched).
    /// - Only a preceding anchor: extrapolate by that anchor's offset.
    /// - Anchors on both sides: if both offsets agree, that value;
    ///   otherwise the line sits inside a changed region with no stable
    ///   1:1 correspondence, and the floor average of the two candidates
    ///   is returned with a logged warning. This is an inherited
    ///   approximation, not a guaranteed-correct answer.
    pub fn translate(&self, old_line: usize) -> usize {
        let before = self.anchors.range(..=old_line).next_back();
        let after = self.anchors.range(old_line..).next();

        match (before, after) {
            (Some((&key, &value)), _) if key == old_line => value,
            (None, _) => old_line,
            (Some((&bk, &bv)), None) => shift(old_line, bk, bv),
            (Some((&bk, &bv)), Some((&ak, &av))) => {
                let from_before = shift(old_line, bk, bv);
                let from_after = shift(old_line, ak, av);
                if from_before == from_after {
                    from_before
                } else {
                    warn!(
                        old_line,
                        from_before, from_after, "ambiguous line mapping, averaging"
                    );
                    (from_before + from_after) / 2
                }
            }
        }
    }

    /// Number of anchor points.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether any anchors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Apply the offset of the anchor (key → value) to `line`.
///
/// Offsets can be negative (lines deleted above), so the arithmetic goes
/// through `isize`. Mapped results clamp at zero rather than wrapping.
fn shift(line: usize, key: usize, value: usize) -> usize {
    let offset = value as isize - key as isize;
    (line as isize + offset).max(0) as usize
}
