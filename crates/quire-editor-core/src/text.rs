//! Markdown source storage.
//!
//! Editing logic talks to [`TextBuffer`]; [`EditorRope`] is the ropey-backed
//! implementation used by sessions. Offsets are char indices throughout.

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::types::EditInfo;

/// Char-indexed editable text.
pub trait TextBuffer {
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert `text` before the char at `char_offset`. Empty text and offsets
    /// past the end are no-ops.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Remove a char range. Empty or out-of-bounds ranges are no-ops.
    fn delete(&mut self, char_range: Range<usize>);

    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        let at = char_range.start;
        self.delete(char_range);
        self.insert(at, text);
    }

    /// Text in `char_range`, or `None` when the range falls outside the buffer.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    fn char_at(&self, char_offset: usize) -> Option<char>;

    fn to_string(&self) -> String;

    fn last_edit(&self) -> Option<&EditInfo>;

    /// Bumped once per primitive insert or delete that changed the text.
    fn revision(&self) -> u64;
}

/// Rope storage that remembers its latest edit and a revision counter.
#[derive(Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
    last_edit: Option<EditInfo>,
    revision: u64,
}

impl EditorRope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(source: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(source),
            ..Self::default()
        }
    }

    fn bump(&mut self, pos: usize, inserted_len: usize, deleted_len: usize) {
        self.revision += 1;
        self.last_edit = Some(EditInfo {
            pos,
            inserted_len,
            deleted_len,
        });
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        if !text.is_empty() && char_offset <= self.rope.len_chars() {
            self.rope.insert(char_offset, text);
            self.bump(char_offset, text.chars().count(), 0);
        }
    }

    fn delete(&mut self, char_range: Range<usize>) {
        if !char_range.is_empty() && char_range.end <= self.rope.len_chars() {
            let (start, len) = (char_range.start, char_range.len());
            self.rope.remove(char_range);
            self.bump(start, 0, len);
        }
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        let in_bounds =
            char_range.start <= char_range.end && char_range.end <= self.rope.len_chars();
        in_bounds.then(|| self.rope.slice(char_range).to_smolstr())
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.rope.get_char(char_offset)
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn last_edit(&self) -> Option<&EditInfo> {
        self.last_edit.as_ref()
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
