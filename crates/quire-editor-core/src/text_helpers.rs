//! Text navigation and analysis helpers.
//!
//! These functions work with the `EditorDocument` trait to provide
//! common text operations like finding line boundaries and word boundaries.

use std::ops::Range;

use crate::actions::ListKind;
use crate::document::EditorDocument;

/// Find start of line containing offset.
pub fn find_line_start<D: EditorDocument>(doc: &D, offset: usize) -> usize {
    let mut pos = offset.min(doc.len_chars());
    while pos > 0 {
        if let Some('\n') = doc.char_at(pos - 1) {
            return pos;
        }
        pos -= 1;
    }
    0
}

/// Find end of line containing offset (position of newline or end of doc).
pub fn find_line_end<D: EditorDocument>(doc: &D, offset: usize) -> usize {
    let len = doc.len_chars();
    if offset >= len {
        return len;
    }

    let mut pos = offset;
    while pos < len {
        if let Some('\n') = doc.char_at(pos) {
            return pos;
        }
        pos += 1;
    }
    len
}

/// Char ranges (without the newline) of every line touched by `range`.
///
/// A range ending exactly at the start of a line does not touch that line,
/// unless the range is empty.
pub fn lines_in_range<D: EditorDocument>(doc: &D, range: Range<usize>) -> Vec<Range<usize>> {
    let len = doc.len_chars();
    let mut lines = Vec::new();
    let mut pos = find_line_start(doc, range.start);

    loop {
        let end = find_line_end(doc, pos);
        lines.push(pos..end);
        if end >= len || end + 1 >= range.end {
            break;
        }
        pos = end + 1;
    }

    lines
}

/// Find word boundary backward from cursor.
pub fn find_word_boundary_backward<D: EditorDocument>(doc: &D, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }

    let mut pos = cursor;

    // Skip any whitespace/punctuation immediately before cursor.
    while pos > 0 {
        match doc.char_at(pos - 1) {
            Some(c) if is_word_char(c) => break,
            Some(_) => pos -= 1,
            None => break,
        }
    }

    // Skip the word characters.
    while pos > 0 {
        match doc.char_at(pos - 1) {
            Some(c) if is_word_char(c) => pos -= 1,
            _ => break,
        }
    }

    pos
}

/// Find word boundary forward from cursor.
pub fn find_word_boundary_forward<D: EditorDocument>(doc: &D, cursor: usize) -> usize {
    let len = doc.len_chars();
    if cursor >= len {
        return len;
    }

    let mut pos = cursor;

    // Skip word characters first.
    while pos < len {
        match doc.char_at(pos) {
            Some(c) if is_word_char(c) => pos += 1,
            _ => break,
        }
    }

    // Then skip whitespace/punctuation.
    while pos < len {
        match doc.char_at(pos) {
            Some(c) if is_word_char(c) => break,
            Some(_) => pos += 1,
            None => break,
        }
    }

    pos
}

/// Whitespace-delimited word around `offset`, as a char range.
///
/// Empty when the cursor sits between two whitespace characters.
pub fn word_at<D: EditorDocument>(doc: &D, offset: usize) -> Range<usize> {
    let len = doc.len_chars();
    let offset = offset.min(len);

    let mut start = offset;
    while start > 0 {
        match doc.char_at(start - 1) {
            Some(c) if !c.is_whitespace() => start -= 1,
            _ => break,
        }
    }

    let mut end = offset;
    while end < len {
        match doc.char_at(end) {
            Some(c) if !c.is_whitespace() => end += 1,
            _ => break,
        }
    }

    start..end
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Block-level syntax at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinePrefix {
    /// No block syntax: a paragraph line.
    None,
    /// `#`..`######` followed by a space.
    Heading { level: u8, len: usize },
    /// List marker after optional indentation.
    List {
        kind: ListKind,
        indent: String,
        /// Item number for numbered lists, 0 for bullets.
        number: usize,
        /// Chars from line start through the space after the marker.
        len: usize,
    },
}

impl LinePrefix {
    /// Chars occupied by the prefix.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Heading { len, .. } | Self::List { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::List { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Longest ordered-list number markdown accepts.
const MAX_LIST_NUMBER_DIGITS: usize = 9;

/// Parse the block prefix of a single line of text (no newline).
pub fn parse_line_prefix(line: &str) -> LinePrefix {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        return LinePrefix::Heading {
            level: hashes as u8,
            len: hashes + 1,
        };
    }

    let indent: String = line
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();
    let trimmed = &line[indent.len()..];
    let indent_chars = indent.chars().count();

    // Unordered list marker: "- " or "* ".
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        return LinePrefix::List {
            kind: ListKind::Bullet,
            indent,
            number: 0,
            len: indent_chars + 2,
        };
    }

    // Ordered list marker: "1. ", "2. ", etc. Markers are at most nine digits.
    if let Some(dot_pos) = trimmed.find(". ") {
        let num_part = &trimmed[..dot_pos];
        if (1..=MAX_LIST_NUMBER_DIGITS).contains(&num_part.len())
            && num_part.chars().all(|c| c.is_ascii_digit())
        {
            if let Ok(number) = num_part.parse::<usize>() {
                return LinePrefix::List {
                    kind: ListKind::Numbered,
                    indent,
                    number,
                    len: indent_chars + dot_pos + 2,
                };
            }
        }
    }

    LinePrefix::None
}

/// Block prefix of the line containing `offset`.
pub fn line_prefix_at<D: EditorDocument>(doc: &D, offset: usize) -> LinePrefix {
    let line_start = find_line_start(doc, offset);
    let line_end = find_line_end(doc, offset);
    doc.slice(line_start..line_end)
        .map(|line| parse_line_prefix(&line))
        .unwrap_or(LinePrefix::None)
}

/// Check if the list item at `offset` is empty (just the marker, no content).
pub fn is_list_item_empty<D: EditorDocument>(doc: &D, offset: usize) -> bool {
    let prefix = line_prefix_at(doc, offset);
    if prefix.list_kind().is_none() {
        return false;
    }
    let line_start = find_line_start(doc, offset);
    let line_end = find_line_end(doc, offset);
    line_end - line_start <= prefix.len()
}
