//! Unified-diff line classification.
//!
//! [`DiffWalker`] turns raw diff lines into a stream of tagged events while
//! maintaining the old-side and new-side line cursors. It is a pure
//! function of its input lines and direction: no I/O, no shared state.

use super::hunk::HunkHeader;

/// Which diff prefix means "removed".
///
/// Some backends can only produce a diff in the opposite orientation; the
/// caller then walks it [`Reversed`](DiffDirection::Reversed), swapping the
/// meaning of `-` and `+` instead of re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffDirection {
    /// `-` removes, `+` adds (conventional unified diff).
    #[default]
    Forward,
    /// `+` removes, `-` adds.
    Reversed,
}

impl DiffDirection {
    fn removal_marker(self) -> char {
        match self {
            DiffDirection::Forward => '-',
            DiffDirection::Reversed => '+',
        }
    }

    fn addition_marker(self) -> char {
        match self {
            DiffDirection::Forward => '+',
            DiffDirection::Reversed => '-',
        }
    }
}

/// One classified diff line, carrying the cursor position of the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// A hunk header; resets both cursors to its begin positions.
    Hunk(HunkHeader),
    /// A line present only on the old side.
    Removed { text: String, old_line: usize },
    /// A line present only on the new side.
    Added { text: String, new_line: usize },
    /// A line present unchanged on both sides; the anchor points for
    /// line-number correspondence.
    Context {
        text: String,
        old_line: usize,
        new_line: usize,
    },
    /// Tool banners, preambles, and anything else unrecognized.
    /// Never fatal and never moves a cursor.
    Ignored,
}

/// Tool noise that may appear between hunks of a single-file diff.
///
/// `--- ` and `+++ ` must be matched here, before the content markers,
/// or file headers would be misread as removed/added lines.
const BANNER_PREFIXES: &[&str] = &[
    "Index:",
    "RCS file:",
    "retrieving revision",
    "diff ",
    "===",
    "***",
    "--- ",
    "+++ ",
    "old mode",
    "new mode",
    "new file mode",
    "deleted file mode",
    "similarity index",
    "rename from",
    "rename to",
    "copy from",
    "copy to",
    "index ",
    "\\ No newline",
];

/// Iterator adapter classifying diff lines into [`DiffEvent`]s.
///
/// Cursors are inactive until the first hunk header; every line before it
/// is `Ignored` regardless of content.
#[derive(Debug)]
pub struct DiffWalker<I> {
    lines: I,
    direction: DiffDirection,
    /// (old, new) cursors; `None` before the first hunk header.
    cursors: Option<(usize, usize)>,
}

impl<I> DiffWalker<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Walk `lines` in the given direction.
    pub fn new<J>(lines: J, direction: DiffDirection) -> DiffWalker<I>
    where
        J: IntoIterator<IntoIter = I>,
    {
        DiffWalker {
            lines: lines.into_iter(),
            direction,
            cursors: None,
        }
    }

    fn classify(&mut self, line: &str) -> DiffEvent {
        // A new hunk header resets the cursors even mid-walk.
        if let Some(header) = HunkHeader::parse(line) {
            self.cursors = Some((header.old_begin, header.new_begin));
            return DiffEvent::Hunk(header);
        }

        // Nothing before the first hunk header is diff body.
        let Some((old, new)) = self.cursors else {
            return DiffEvent::Ignored;
        };

        if BANNER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return DiffEvent::Ignored;
        }

        let mut chars = line.chars();
        match chars.next() {
            Some(c) if c == self.direction.removal_marker() => {
                self.cursors = Some((old + 1, new));
                DiffEvent::Removed {
                    text: chars.as_str().to_string(),
                    old_line: old,
                }
            }
            Some(c) if c == self.direction.addition_marker() => {
                self.cursors = Some((old, new + 1));
                DiffEvent::Added {
                    text: chars.as_str().to_string(),
                    new_line: new,
                }
            }
            Some(' ') => {
                self.cursors = Some((old + 1, new + 1));
                DiffEvent::Context {
                    text: chars.as_str().to_string(),
                    old_line: old,
                    new_line: new,
                }
            }
            // Unrecognized content is tolerated, not rejected: diff
            // dialects vary across backends.
            _ => DiffEvent::Ignored,
        }
    }
}

impl<I> Iterator for DiffWalker<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = DiffEvent;

    fn next(&mut self) -> Option<DiffEvent> {
        let line = self.lines.next()?;
        Some(self.classify(line.as_ref()))
    }
}
