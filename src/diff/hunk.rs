//! Hunk header recognition.
//!
//! A unified-diff hunk opens with `@@ -a[,b] +c[,d] @@`, optionally
//! followed by trailing context (function names, tool annotations) that is
//! accepted and ignored.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `@@ -a[,b] +c[,d] @@` with arbitrary trailing text.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("hunk header regex")
});

/// Parsed positions from a hunk header line.
///
/// When a count is omitted (`@@ -10 +12 @@`), GNU diff means a single-line
/// range starting at the begin value; the count fields then default to the
/// begin value itself. Current consumers only use the begin positions, but
/// the counts are part of the header grammar and are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// 1-based start line on the old side.
    pub old_begin: usize,
    /// Line count on the old side (begin value when omitted).
    pub old_count: usize,
    /// 1-based start line on the new side.
    pub new_begin: usize,
    /// Line count on the new side (begin value when omitted).
    pub new_count: usize,
}

impl HunkHeader {
    /// Parse a hunk header line.
    ///
    /// Returns `None` for anything that is not a well-formed header,
    /// including lines that merely start with `@@`. Callers treat such
    /// lines as ordinary content, never as an error.
    pub fn parse(line: &str) -> Option<HunkHeader> {
        let caps = HUNK_HEADER.captures(line)?;

        let number = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<usize>().ok());

        let old_begin = number(1)?;
        let new_begin = number(3)?;

        Some(HunkHeader {
            old_begin,
            old_count: number(2).unwrap_or(old_begin),
            new_begin,
            new_count: number(4).unwrap_or(new_begin),
        })
    }
}
