//! Tests for hunk header parsing and diff walking.

use super::{DiffDirection, DiffEvent, DiffWalker, HunkHeader};

/// Test parsing a hunk header with both counts present.
#[test]
fn test_parse_hunk_header_with_counts() {
    let header = HunkHeader::parse("@@ -111,41 +113,41 @@").unwrap();

    assert_eq!(header.old_begin, 111);
    assert_eq!(header.old_count, 41);
    assert_eq!(header.new_begin, 113);
    assert_eq!(header.new_count, 41);
}

/// Test that omitted counts default to the begin values.
#[test]
fn test_parse_hunk_header_without_counts() {
    let header = HunkHeader::parse("@@ -10 +12 @@").unwrap();

    assert_eq!(header.old_begin, 10);
    assert_eq!(header.new_begin, 12);
    assert_eq!(header.old_count, 10);
    assert_eq!(header.new_count, 12);
}

/// Test that trailing annotation text after the closing @@ is ignored.
#[test]
fn test_parse_hunk_header_with_trailing_context() {
    let header = HunkHeader::parse("@@ -5,3 +5,4 @@ fn existing_function() {").unwrap();

    assert_eq!(header.old_begin, 5);
    assert_eq!(header.new_begin, 5);
}

/// Test that a line merely starting with @@ is not treated as a header.
#[test]
fn test_parse_malformed_hunk_header_is_rejected() {
    assert!(HunkHeader::parse("@@ not a header @@").is_none());
    assert!(HunkHeader::parse("@@ -a,b +c,d @@").is_none());
    assert!(HunkHeader::parse("@@-1 +2@@").is_none());
}

/// Test forward-direction marker handling and cursor advance.
#[test]
fn test_walk_forward_markers() {
    let lines = ["@@ -3,2 +7,2 @@", "-foo", "+bar", " baz"];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], DiffEvent::Hunk(_)));
    assert_eq!(
        events[1],
        DiffEvent::Removed {
            text: "foo".to_string(),
            old_line: 3,
        }
    );
    assert_eq!(
        events[2],
        DiffEvent::Added {
            text: "bar".to_string(),
            new_line: 7,
        }
    );
    // Removal advanced old to 4, addition advanced new to 8.
    assert_eq!(
        events[3],
        DiffEvent::Context {
            text: "baz".to_string(),
            old_line: 4,
            new_line: 8,
        }
    );
}

/// Test that reversed direction swaps the roles of - and +.
#[test]
fn test_walk_reversed_markers() {
    let lines = ["@@ -3,2 +7,2 @@", "-foo", "+bar"];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Reversed).collect();

    assert_eq!(
        events[1],
        DiffEvent::Added {
            text: "foo".to_string(),
            new_line: 7,
        }
    );
    assert_eq!(
        events[2],
        DiffEvent::Removed {
            text: "bar".to_string(),
            old_line: 3,
        }
    );
}

/// Test that everything before the first hunk header is ignored,
/// including lines that look like content markers.
#[test]
fn test_walk_preamble_is_inert() {
    let lines = [
        "Index: src/widget.c",
        "===================================================================",
        "RCS file: /cvsroot/src/widget.c,v",
        "retrieving revision 1.7",
        "diff -u -r1.7 widget.c",
        "--- widget.c\t2024-01-05 10:11:12",
        "+++ widget.c\t2024-01-06 09:00:00",
        "-this is not a removal yet",
    ];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert!(events.iter().all(|e| *e == DiffEvent::Ignored));
}

/// Test banner tolerance after a hunk has started.
#[test]
fn test_walk_banners_inside_body_do_not_move_cursors() {
    let lines = [
        "@@ -1,2 +1,2 @@",
        " same",
        "\\ No newline at end of file",
        "-old",
        "+new",
    ];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert_eq!(events[2], DiffEvent::Ignored);
    // The banner did not disturb the cursors: old was at 2 after the context line.
    assert_eq!(
        events[3],
        DiffEvent::Removed {
            text: "old".to_string(),
            old_line: 2,
        }
    );
}

/// Test that a second hunk header resets both cursors.
#[test]
fn test_walk_multiple_hunks_reset_cursors() {
    let lines = ["@@ -1,1 +1,1 @@", " a", "@@ -50,2 +60,2 @@", " b"];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert_eq!(
        events[3],
        DiffEvent::Context {
            text: "b".to_string(),
            old_line: 50,
            new_line: 60,
        }
    );
}

/// Test that an unrecognized line inside a hunk is ignored, not fatal.
#[test]
fn test_walk_unrecognized_line_is_ignored() {
    let lines = ["@@ -1,1 +1,1 @@", "? dialect oddity", " a"];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert_eq!(events[1], DiffEvent::Ignored);
    assert_eq!(
        events[2],
        DiffEvent::Context {
            text: "a".to_string(),
            old_line: 1,
            new_line: 1,
        }
    );
}

/// Test that a malformed @@ line inside a hunk is ordinary ignored content.
#[test]
fn test_walk_malformed_header_inside_body() {
    let lines = ["@@ -1,1 +1,1 @@", "@@ garbled @@", " a"];
    let events: Vec<DiffEvent> = DiffWalker::new(lines.iter(), DiffDirection::Forward).collect();

    assert_eq!(events[1], DiffEvent::Ignored);
    assert_eq!(
        events[2],
        DiffEvent::Context {
            text: "a".to_string(),
            old_line: 1,
            new_line: 1,
        }
    );
}
