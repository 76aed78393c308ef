//! Action execution for editor documents.
//!
//! This module provides the `execute_action` function that applies `EditorAction`
//! operations to any type implementing `EditorDocument`. Formatting actions
//! edit the markdown source directly and are recorded as a single undo step.

use crate::actions::{EditorAction, ListKind, Mark, Range};
use crate::command::LinkUrl;
use crate::document::EditorDocument;
use crate::text_helpers::{
    LinePrefix, find_line_end, find_line_start, find_word_boundary_backward,
    find_word_boundary_forward, is_list_item_empty, line_prefix_at, lines_in_range,
    parse_line_prefix, word_at,
};
use crate::types::Selection;

/// Execute an editor action on a document.
///
/// This is the central dispatch point for all editor operations.
/// Returns true if the action was handled. Callers that need to know whether
/// the text changed compare [`EditorDocument::revision`] before and after.
pub fn execute_action<D: EditorDocument>(doc: &mut D, action: &EditorAction) -> bool {
    match action {
        EditorAction::Insert { text, range } => execute_insert(doc, text, *range),
        EditorAction::InsertParagraph { range } => execute_insert_paragraph(doc, *range),
        EditorAction::DeleteBackward { range } => execute_delete_backward(doc, *range),
        EditorAction::DeleteForward { range } => execute_delete_forward(doc, *range),
        EditorAction::DeleteWordBackward { range } => execute_delete_word_backward(doc, *range),
        EditorAction::DeleteWordForward { range } => execute_delete_word_forward(doc, *range),
        EditorAction::Undo => execute_undo(doc),
        EditorAction::Redo => execute_redo(doc),
        EditorAction::ToggleMark(mark) => execute_toggle_mark(doc, *mark),
        EditorAction::ToggleHeading { level } => execute_toggle_heading(doc, *level),
        EditorAction::ToggleList(kind) => execute_toggle_list(doc, *kind),
        EditorAction::InsertLink { url } => execute_insert_link(doc, url),
        EditorAction::SelectAll => execute_select_all(doc),
        EditorAction::MoveCursor { offset } => execute_move_cursor(doc, *offset),
        EditorAction::ExtendSelection { offset } => execute_extend_selection(doc, *offset),
    }
}

fn execute_insert<D: EditorDocument>(doc: &mut D, text: &str, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());

    if range.is_caret() {
        doc.insert(range.start, text);
    } else {
        doc.replace(range.start..range.end, text);
    }

    doc.set_selection(None);
    true
}

fn execute_insert_paragraph<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());
    let cursor_offset = range.start;

    doc.transact(|doc| {
        // Delete selection if any.
        if !range.is_caret() {
            doc.delete(cursor_offset..range.end);
        }

        match line_prefix_at(doc, cursor_offset) {
            LinePrefix::List { .. } if is_list_item_empty(doc, cursor_offset) => {
                // Empty item - exit list.
                let line_start = find_line_start(doc, cursor_offset);
                let line_end = find_line_end(doc, cursor_offset);
                doc.delete(line_start..line_end);
                doc.set_cursor_offset(line_start);
            }
            LinePrefix::List {
                kind,
                indent,
                number,
                ..
            } => {
                // Continue list.
                let continuation = match kind {
                    ListKind::Bullet => {
                        let line_start = find_line_start(doc, cursor_offset);
                        let marker = doc
                            .char_at(line_start + indent.chars().count())
                            .unwrap_or('-');
                        format!("\n{indent}{marker} ")
                    }
                    ListKind::Numbered => {
                        format!("\n{indent}{}. ", number.saturating_add(1))
                    }
                };
                doc.insert(cursor_offset, &continuation);
            }
            _ => {
                // Normal paragraph break.
                doc.insert(cursor_offset, "\n\n");
            }
        }
    });

    doc.set_selection(None);
    true
}

fn execute_delete_backward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());

    if !range.is_caret() {
        // Delete selection.
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start == 0 {
        return false;
    }

    let cursor_offset = range.start;
    let prev_char = doc.char_at(cursor_offset - 1);

    if prev_char == Some('\n') {
        // Deleting a newline merges paragraphs; a blank separator line goes too.
        let newline_pos = cursor_offset - 1;
        let mut delete_start = newline_pos;
        if newline_pos > 0 && doc.char_at(newline_pos - 1) == Some('\n') {
            delete_start = newline_pos - 1;
        }
        doc.delete(delete_start..cursor_offset);
    } else {
        // Normal single char delete.
        doc.delete(cursor_offset - 1..cursor_offset);
    }

    doc.set_selection(None);
    true
}

fn execute_delete_forward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start >= doc.len_chars() {
        return false;
    }

    doc.delete(range.start..range.start + 1);
    doc.set_selection(None);
    true
}

fn execute_delete_word_backward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    let cursor = range.start;
    let word_start = find_word_boundary_backward(doc, cursor);
    if word_start < cursor {
        doc.delete(word_start..cursor);
    }

    doc.set_selection(None);
    true
}

fn execute_delete_word_forward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.clamp(doc.len_chars());

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    let cursor = range.start;
    let word_end = find_word_boundary_forward(doc, cursor);
    if word_end > cursor {
        doc.delete(cursor..word_end);
    }

    doc.set_selection(None);
    true
}

fn execute_undo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.undo() {
        clamp_cursor(doc);
        true
    } else {
        false
    }
}

fn execute_redo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.redo() {
        clamp_cursor(doc);
        true
    } else {
        false
    }
}

fn clamp_cursor<D: EditorDocument>(doc: &mut D) {
    let max = doc.len_chars();
    if doc.cursor_offset() > max {
        doc.set_cursor_offset(max);
    }
    doc.set_selection(None);
}

fn execute_toggle_mark<D: EditorDocument>(doc: &mut D, mark: Mark) -> bool {
    let (open, close) = mark.delimiters();
    let open_len = open.chars().count();
    let close_len = close.chars().count();
    let (start, end) = target_range(doc);

    if wrapped_outside(doc, start, end, mark) {
        // Markers hug the target: unwrap.
        doc.transact(|doc| {
            doc.delete(end..end + close_len);
            doc.delete(start - open_len..start);
        });
        select_range(doc, start - open_len, end - open_len);
    } else if wrapped_inside(doc, start, end, mark) {
        // Target includes its own markers: unwrap.
        doc.transact(|doc| {
            doc.delete(end - close_len..end);
            doc.delete(start..start + open_len);
        });
        select_range(doc, start, end - open_len - close_len);
    } else if start == end {
        // Nothing to wrap: leave the cursor between fresh markers.
        doc.insert(start, &format!("{open}{close}"));
        doc.set_cursor_offset(start + open_len);
        doc.set_selection(None);
    } else {
        // Insert end marker first so start position stays valid.
        doc.transact(|doc| {
            doc.insert(end, close);
            doc.insert(start, open);
        });
        select_range(doc, start + open_len, end + open_len);
    }

    true
}

/// Whether `mark` wraps `start..end` from outside.
fn wrapped_outside<D: EditorDocument>(doc: &D, start: usize, end: usize, mark: Mark) -> bool {
    match mark {
        Mark::Bold | Mark::Italic => {
            let lead = star_run_backward(doc, start, start);
            let trail = star_run_forward(doc, end, doc.len_chars().saturating_sub(end));
            star_mark_present(mark, lead, trail)
        }
        Mark::Underline | Mark::Strikethrough => {
            let (open, close) = mark.delimiters();
            let open_len = open.chars().count();
            let close_len = close.chars().count();
            start >= open_len
                && slice_is(doc, start - open_len..start, open)
                && slice_is(doc, end..end + close_len, close)
        }
    }
}

/// Whether `start..end` begins and ends with the markers of `mark`.
fn wrapped_inside<D: EditorDocument>(doc: &D, start: usize, end: usize, mark: Mark) -> bool {
    let len = end - start;
    match mark {
        Mark::Bold | Mark::Italic => {
            let lead = star_run_forward(doc, start, len);
            if lead == len {
                return false;
            }
            let trail = star_run_backward(doc, end, len - lead);
            star_mark_present(mark, lead, trail)
        }
        Mark::Underline | Mark::Strikethrough => {
            let (open, close) = mark.delimiters();
            let open_len = open.chars().count();
            let close_len = close.chars().count();
            len >= open_len + close_len
                && slice_is(doc, start..start + open_len, open)
                && slice_is(doc, end - close_len..end, close)
        }
    }
}

/// Bold and italic share `*`: a run of two or more carries bold, an odd run
/// carries italic.
fn star_mark_present(mark: Mark, lead: usize, trail: usize) -> bool {
    match mark {
        Mark::Bold => lead >= 2 && trail >= 2,
        Mark::Italic => lead % 2 == 1 && trail % 2 == 1,
        _ => false,
    }
}

fn star_run_forward<D: EditorDocument>(doc: &D, pos: usize, limit: usize) -> usize {
    let mut count = 0;
    while count < limit && doc.char_at(pos + count) == Some('*') {
        count += 1;
    }
    count
}

fn star_run_backward<D: EditorDocument>(doc: &D, pos: usize, limit: usize) -> usize {
    let mut count = 0;
    while count < limit && count < pos && doc.char_at(pos - count - 1) == Some('*') {
        count += 1;
    }
    count
}

fn slice_is<D: EditorDocument>(doc: &D, range: std::ops::Range<usize>, expected: &str) -> bool {
    doc.slice(range).is_some_and(|s| s.as_str() == expected)
}

fn execute_toggle_heading<D: EditorDocument>(doc: &mut D, level: u8) -> bool {
    let level = level.clamp(1, 6);
    let targets = touched_lines(doc);
    if targets.is_empty() {
        return false;
    }

    let remove = targets
        .iter()
        .all(|(_, prefix)| prefix.heading_level() == Some(level));
    let marker = format!("{} ", "#".repeat(level as usize));

    let edits = targets
        .into_iter()
        .filter_map(|(line, prefix)| {
            if !remove && prefix.heading_level() == Some(level) {
                return None;
            }
            Some(LineEdit {
                line_start: line.start,
                old_len: prefix.len(),
                new_prefix: if remove { String::new() } else { marker.clone() },
            })
        })
        .collect();

    apply_line_edits(doc, edits)
}

fn execute_toggle_list<D: EditorDocument>(doc: &mut D, kind: ListKind) -> bool {
    let targets = touched_lines(doc);
    if targets.is_empty() {
        return false;
    }

    let remove = targets
        .iter()
        .all(|(_, prefix)| prefix.list_kind() == Some(kind));

    let mut edits = Vec::with_capacity(targets.len());
    for (index, (line, prefix)) in targets.into_iter().enumerate() {
        let indent = match &prefix {
            LinePrefix::List { indent, .. } => indent.as_str(),
            _ => "",
        };
        let new_prefix = match (remove, kind) {
            (true, _) => indent.to_owned(),
            (false, ListKind::Bullet) => format!("{indent}- "),
            (false, ListKind::Numbered) => format!("{indent}{}. ", index + 1),
        };

        let unchanged = doc
            .slice(line.start..line.start + prefix.len())
            .is_some_and(|old| old.as_str() == new_prefix);
        if unchanged {
            continue;
        }

        edits.push(LineEdit {
            line_start: line.start,
            old_len: prefix.len(),
            new_prefix,
        });
    }

    apply_line_edits(doc, edits)
}

/// Lines touched by the selection (or cursor) with their block prefixes.
///
/// Blank lines are skipped when more than one line is touched.
fn touched_lines<D: EditorDocument>(doc: &D) -> Vec<(std::ops::Range<usize>, LinePrefix)> {
    let len = doc.len_chars();
    let (start, end) = match doc.selection() {
        Some(sel) => (sel.start().min(len), sel.end().min(len)),
        None => {
            let cursor = doc.cursor_offset().min(len);
            (cursor, cursor)
        }
    };

    let lines = lines_in_range(doc, start..end);
    let multi = lines.len() > 1;

    lines
        .into_iter()
        .filter_map(|line| {
            let text = doc.slice(line.clone())?;
            if multi && text.trim().is_empty() {
                return None;
            }
            let prefix = parse_line_prefix(&text);
            Some((line, prefix))
        })
        .collect()
}

/// Replacement of one line's block prefix.
struct LineEdit {
    line_start: usize,
    old_len: usize,
    new_prefix: String,
}

impl LineEdit {
    /// Where `pos` ends up after this edit.
    fn shift(&self, pos: usize) -> usize {
        let new_len = self.new_prefix.chars().count();
        if pos < self.line_start {
            pos
        } else if pos == self.line_start || pos < self.line_start + self.old_len {
            self.line_start + new_len
        } else {
            pos - self.old_len + new_len
        }
    }
}

/// Apply prefix edits (given top-down) bottom-up as one undo step, carrying
/// the cursor and selection along.
fn apply_line_edits<D: EditorDocument>(doc: &mut D, edits: Vec<LineEdit>) -> bool {
    if edits.is_empty() {
        return false;
    }

    let mut cursor = doc.cursor_offset();
    let mut selection = doc.selection();

    doc.transact(|doc| {
        for edit in edits.iter().rev() {
            doc.replace(
                edit.line_start..edit.line_start + edit.old_len,
                &edit.new_prefix,
            );
            cursor = edit.shift(cursor);
            selection =
                selection.map(|sel| Selection::new(edit.shift(sel.anchor), edit.shift(sel.head)));
        }
    });

    doc.set_cursor_offset(cursor);
    doc.set_selection(selection);
    true
}

fn execute_insert_link<D: EditorDocument>(doc: &mut D, url: &LinkUrl) -> bool {
    let (start, end) = target_range(doc);
    let url = url.as_str();

    if start == end {
        let link = format!("[{url}]({url})");
        doc.insert(start, &link);
    } else {
        // Insert [selected text](url)
        let tail = format!("]({url})");
        doc.transact(|doc| {
            doc.insert(end, &tail);
            doc.insert(start, "[");
        });
        doc.set_cursor_offset(end + 1 + tail.chars().count());
    }

    doc.set_selection(None);
    true
}

fn execute_select_all<D: EditorDocument>(doc: &mut D) -> bool {
    let len = doc.len_chars();
    doc.set_selection(Some(Selection::new(0, len)));
    doc.set_cursor_offset(len);
    true
}

fn execute_move_cursor<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    let offset = offset.min(doc.len_chars());
    doc.set_cursor_offset(offset);
    doc.set_selection(None);
    true
}

fn execute_extend_selection<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    let offset = offset.min(doc.len_chars());
    let anchor = doc
        .selection()
        .map(|s| s.anchor)
        .unwrap_or_else(|| doc.cursor_offset());
    doc.set_selection(Some(Selection::new(anchor, offset)));
    doc.set_cursor_offset(offset);
    true
}

/// The selection if it is non-empty, otherwise the word around the cursor.
fn target_range<D: EditorDocument>(doc: &D) -> (usize, usize) {
    let len = doc.len_chars();
    match doc.selection() {
        Some(sel) if !sel.is_collapsed() => (sel.start().min(len), sel.end().min(len)),
        _ => {
            let word = word_at(doc, doc.cursor_offset().min(len));
            (word.start, word.end)
        }
    }
}

fn select_range<D: EditorDocument>(doc: &mut D, start: usize, end: usize) {
    doc.set_selection(Some(Selection::new(start, end)));
    doc.set_cursor_offset(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorRope, PlainEditor, UndoableBuffer};

    type TestEditor = PlainEditor<UndoableBuffer<EditorRope>>;

    fn make_editor(content: &str) -> TestEditor {
        let rope = EditorRope::from_str(content);
        let buf = UndoableBuffer::new(rope, 100);
        PlainEditor::new(buf)
    }

    fn select(editor: &mut TestEditor, start: usize, end: usize) {
        editor.set_selection(Some(Selection::new(start, end)));
        editor.set_cursor_offset(end);
    }

    fn link(url: &str) -> EditorAction {
        EditorAction::InsertLink {
            url: LinkUrl::new(url).unwrap(),
        }
    }

    #[test]
    fn test_insert() {
        let mut editor = make_editor("hello");
        let action = EditorAction::Insert {
            text: " world".to_string(),
            range: Range::caret(5),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hello world");
    }

    #[test]
    fn test_insert_replaces_range() {
        let mut editor = make_editor("hello world");
        let action = EditorAction::Insert {
            text: "rust".to_string(),
            range: Range::new(11, 6),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hello rust");
    }

    #[test]
    fn test_delete_backward() {
        let mut editor = make_editor("hello");
        editor.set_cursor_offset(5);
        let action = EditorAction::DeleteBackward {
            range: Range::caret(5),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hell");
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut editor = make_editor("hello");
        let action = EditorAction::DeleteBackward {
            range: Range::caret(0),
        };
        assert!(!execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hello");
    }

    #[test]
    fn test_delete_backward_merges_paragraphs() {
        let mut editor = make_editor("one\n\ntwo");
        let action = EditorAction::DeleteBackward {
            range: Range::caret(5),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "onetwo");
        assert_eq!(editor.cursor_offset(), 3);
    }

    #[test]
    fn test_delete_selection() {
        let mut editor = make_editor("hello world");
        editor.set_selection(Some(Selection::new(5, 11)));
        let action = EditorAction::DeleteBackward {
            range: Range::new(5, 11),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hello");
    }

    #[test]
    fn test_delete_forward() {
        let mut editor = make_editor("hello");
        let action = EditorAction::DeleteForward {
            range: Range::caret(0),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "ello");

        let action = EditorAction::DeleteForward {
            range: Range::caret(4),
        };
        assert!(!execute_action(&mut editor, &action));
    }

    #[test]
    fn test_delete_words() {
        let mut editor = make_editor("alpha beta gamma");
        let action = EditorAction::DeleteWordBackward {
            range: Range::caret(10),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "alpha  gamma");

        let action = EditorAction::DeleteWordForward {
            range: Range::caret(0),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "gamma");
    }

    #[test]
    fn test_undo_redo() {
        let mut editor = make_editor("hello");

        let action = EditorAction::Insert {
            text: " world".to_string(),
            range: Range::caret(5),
        };
        execute_action(&mut editor, &action);
        assert_eq!(editor.content_string(), "hello world");

        assert!(execute_action(&mut editor, &EditorAction::Undo));
        assert_eq!(editor.content_string(), "hello");

        assert!(execute_action(&mut editor, &EditorAction::Redo));
        assert_eq!(editor.content_string(), "hello world");

        assert!(!execute_action(&mut editor, &EditorAction::Redo));
    }

    #[test]
    fn test_select_all() {
        let mut editor = make_editor("hello world");
        assert!(execute_action(&mut editor, &EditorAction::SelectAll));
        let sel = editor.selection().unwrap();
        assert_eq!(sel.start(), 0);
        assert_eq!(sel.end(), 11);
    }

    #[test]
    fn test_extend_selection() {
        let mut editor = make_editor("hello world");
        execute_action(&mut editor, &EditorAction::MoveCursor { offset: 2 });
        execute_action(&mut editor, &EditorAction::ExtendSelection { offset: 40 });
        assert_eq!(editor.selection(), Some(Selection::new(2, 11)));
        assert_eq!(editor.cursor_offset(), 11);
    }

    #[test]
    fn test_toggle_bold() {
        let mut editor = make_editor("hello");
        select(&mut editor, 0, 5);
        assert!(execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold)));
        assert_eq!(editor.content_string(), "**hello**");
        assert_eq!(editor.selected_text(), Some("hello".into()));
    }

    #[test]
    fn test_toggle_bold_twice_restores() {
        let mut editor = make_editor("say hello now");
        select(&mut editor, 4, 9);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold));
        assert_eq!(editor.content_string(), "say **hello** now");

        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold));
        assert_eq!(editor.content_string(), "say hello now");
        assert_eq!(editor.selected_text(), Some("hello".into()));
    }

    #[test]
    fn test_toggle_bold_with_markers_selected() {
        let mut editor = make_editor("**hello**");
        select(&mut editor, 0, 9);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold));
        assert_eq!(editor.content_string(), "hello");
        assert_eq!(editor.selected_text(), Some("hello".into()));
    }

    #[test]
    fn test_toggle_italic_inside_bold() {
        let mut editor = make_editor("**hello**");
        select(&mut editor, 2, 7);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Italic));
        assert_eq!(editor.content_string(), "***hello***");

        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Italic));
        assert_eq!(editor.content_string(), "**hello**");
    }

    #[test]
    fn test_toggle_bold_on_word_under_cursor() {
        let mut editor = make_editor("one two three");
        editor.set_cursor_offset(5);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold));
        assert_eq!(editor.content_string(), "one **two** three");
    }

    #[test]
    fn test_toggle_mark_on_empty_target() {
        let mut editor = make_editor("");
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Underline));
        assert_eq!(editor.content_string(), "<u></u>");
        assert_eq!(editor.cursor_offset(), 3);
    }

    #[test]
    fn test_toggle_strikethrough_and_underline() {
        let mut editor = make_editor("gone");
        select(&mut editor, 0, 4);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Strikethrough));
        assert_eq!(editor.content_string(), "~~gone~~");
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Underline));
        assert_eq!(editor.content_string(), "~~<u>gone</u>~~");
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Underline));
        assert_eq!(editor.content_string(), "~~gone~~");
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Strikethrough));
        assert_eq!(editor.content_string(), "gone");
    }

    #[test]
    fn test_toggle_mark_is_one_undo_step() {
        let mut editor = make_editor("hello");
        select(&mut editor, 0, 5);
        execute_action(&mut editor, &EditorAction::ToggleMark(Mark::Bold));
        assert!(execute_action(&mut editor, &EditorAction::Undo));
        assert_eq!(editor.content_string(), "hello");
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_heading_toggle() {
        let mut editor = make_editor("Title\nbody");
        editor.set_cursor_offset(2);
        assert!(execute_action(&mut editor, &EditorAction::ToggleHeading { level: 1 }));
        assert_eq!(editor.content_string(), "# Title\nbody");
        assert_eq!(editor.cursor_offset(), 4);

        execute_action(&mut editor, &EditorAction::ToggleHeading { level: 2 });
        assert_eq!(editor.content_string(), "## Title\nbody");

        execute_action(&mut editor, &EditorAction::ToggleHeading { level: 2 });
        assert_eq!(editor.content_string(), "Title\nbody");
    }

    #[test]
    fn test_heading_replaces_list_prefix() {
        let mut editor = make_editor("- item");
        editor.set_cursor_offset(3);
        execute_action(&mut editor, &EditorAction::ToggleHeading { level: 1 });
        assert_eq!(editor.content_string(), "# item");
    }

    #[test]
    fn test_heading_on_empty_document() {
        let mut editor = make_editor("");
        assert!(execute_action(&mut editor, &EditorAction::ToggleHeading { level: 1 }));
        assert_eq!(editor.content_string(), "# ");
        assert_eq!(editor.cursor_offset(), 2);
    }

    #[test]
    fn test_bullet_list_over_selection() {
        let mut editor = make_editor("one\n\ntwo\nthree");
        select(&mut editor, 0, 14);
        execute_action(&mut editor, &EditorAction::ToggleList(ListKind::Bullet));
        assert_eq!(editor.content_string(), "- one\n\n- two\n- three");
        assert_eq!(editor.selected_text(), Some("one\n\n- two\n- three".into()));

        execute_action(&mut editor, &EditorAction::ToggleList(ListKind::Bullet));
        assert_eq!(editor.content_string(), "one\n\ntwo\nthree");
    }

    #[test]
    fn test_numbered_list_renumbers() {
        let mut editor = make_editor("- a\n- b\nc");
        select(&mut editor, 0, 9);
        execute_action(&mut editor, &EditorAction::ToggleList(ListKind::Numbered));
        assert_eq!(editor.content_string(), "1. a\n2. b\n3. c");
    }

    #[test]
    fn test_partial_list_gets_completed() {
        let mut editor = make_editor("- a\nb");
        select(&mut editor, 0, 5);
        execute_action(&mut editor, &EditorAction::ToggleList(ListKind::Bullet));
        assert_eq!(editor.content_string(), "- a\n- b");
    }

    #[test]
    fn test_list_toggle_is_one_undo_step() {
        let mut editor = make_editor("a\nb");
        select(&mut editor, 0, 3);
        execute_action(&mut editor, &EditorAction::ToggleList(ListKind::Numbered));
        assert_eq!(editor.content_string(), "1. a\n2. b");
        execute_action(&mut editor, &EditorAction::Undo);
        assert_eq!(editor.content_string(), "a\nb");
    }

    #[test]
    fn test_insert_link_wraps_selection() {
        let mut editor = make_editor("see docs here");
        select(&mut editor, 4, 8);
        assert!(execute_action(&mut editor, &link("https://example.com")));
        assert_eq!(
            editor.content_string(),
            "see [docs](https://example.com) here"
        );
        assert_eq!(editor.cursor_offset(), 31);
    }

    #[test]
    fn test_insert_link_on_empty_target() {
        let mut editor = make_editor("go ");
        editor.set_cursor_offset(3);
        execute_action(&mut editor, &link("a.io"));
        assert_eq!(editor.content_string(), "go [a.io](a.io)");
    }

    #[test]
    fn test_paragraph_break() {
        let mut editor = make_editor("onetwo");
        let action = EditorAction::InsertParagraph {
            range: Range::caret(3),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "one\n\ntwo");
        assert_eq!(editor.cursor_offset(), 5);
    }

    #[test]
    fn test_paragraph_continues_lists() {
        let mut editor = make_editor("* a");
        execute_action(
            &mut editor,
            &EditorAction::InsertParagraph {
                range: Range::caret(3),
            },
        );
        assert_eq!(editor.content_string(), "* a\n* ");

        let mut editor = make_editor("  3. c");
        execute_action(
            &mut editor,
            &EditorAction::InsertParagraph {
                range: Range::caret(6),
            },
        );
        assert_eq!(editor.content_string(), "  3. c\n  4. ");
        assert_eq!(editor.cursor_offset(), 12);
    }

    #[test]
    fn test_paragraph_exits_empty_list_item() {
        let mut editor = make_editor("- a\n- ");
        execute_action(
            &mut editor,
            &EditorAction::InsertParagraph {
                range: Range::caret(6),
            },
        );
        assert_eq!(editor.content_string(), "- a\n");
        assert_eq!(editor.cursor_offset(), 4);
    }

    #[test]
    fn test_out_of_range_insert_is_clamped() {
        let mut editor = make_editor("hi");
        let action = EditorAction::Insert {
            text: "x".into(),
            range: Range::caret(10),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "hix");

        assert!(execute_action(&mut editor, &EditorAction::Undo));
        assert_eq!(editor.content_string(), "hi");
        assert!(!editor.can_undo());
        assert_eq!(editor.cursor_offset(), 2);
    }

    #[test]
    fn test_out_of_range_deletes_are_clamped() {
        let mut editor = make_editor("abc");
        execute_action(
            &mut editor,
            &EditorAction::DeleteForward {
                range: Range::new(2, 40),
            },
        );
        assert_eq!(editor.content_string(), "ab");

        let action = EditorAction::DeleteBackward {
            range: Range::caret(40),
        };
        assert!(execute_action(&mut editor, &action));
        assert_eq!(editor.content_string(), "a");
    }

    #[test]
    fn test_paragraph_after_oversized_list_number() {
        let line = "18446744073709551615. x";
        let mut editor = make_editor(line);
        execute_action(
            &mut editor,
            &EditorAction::InsertParagraph {
                range: Range::caret(line.len()),
            },
        );
        assert_eq!(editor.content_string(), format!("{line}\n\n"));

        let mut editor = make_editor("999999999. x");
        execute_action(
            &mut editor,
            &EditorAction::InsertParagraph {
                range: Range::caret(12),
            },
        );
        assert_eq!(editor.content_string(), "999999999. x\n1000000000. ");
    }
}
