//! Document abstraction the editing actions run against.
//!
//! [`EditorDocument`] pairs a buffer with a cursor and an optional selection.
//! The actions in `execute` only see this trait.

use std::ops::Range;

use smol_str::SmolStr;

use crate::extract;
use crate::text::TextBuffer;
use crate::types::{EditInfo, Selection, Snapshot};
use crate::undo::UndoManager;

pub trait EditorDocument {
    type Buffer: TextBuffer + UndoManager;

    fn buffer(&self) -> &Self::Buffer;

    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    /// Caret position as a char offset.
    fn cursor_offset(&self) -> usize;

    fn set_cursor_offset(&mut self, offset: usize);

    fn selection(&self) -> Option<Selection>;

    fn set_selection(&mut self, selection: Option<Selection>);

    /// Markdown source.
    fn content_string(&self) -> String {
        self.buffer().to_string()
    }

    fn len_chars(&self) -> usize {
        self.buffer().len_chars()
    }

    fn slice(&self, range: Range<usize>) -> Option<SmolStr> {
        self.buffer().slice(range)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer().char_at(offset)
    }

    fn selected_text(&self) -> Option<SmolStr> {
        self.slice(self.selection()?.to_range())
    }

    fn revision(&self) -> u64 {
        self.buffer().revision()
    }

    fn last_edit(&self) -> Option<EditInfo> {
        self.buffer().last_edit().copied()
    }

    fn snapshot(&self) -> Snapshot {
        let markup = self.content_string();
        Snapshot {
            text: extract::plain_text(&markup),
            markup,
        }
    }

    /// Insert and leave the caret after the inserted text.
    fn insert(&mut self, offset: usize, text: &str) -> Option<EditInfo> {
        self.buffer_mut().insert(offset, text);
        self.set_cursor_offset(offset + text.chars().count());
        self.last_edit()
    }

    /// Delete and leave the caret at the start of the range.
    fn delete(&mut self, range: Range<usize>) -> Option<EditInfo> {
        let start = range.start;
        self.buffer_mut().delete(range);
        self.set_cursor_offset(start);
        self.last_edit()
    }

    /// Delete-then-insert as a single undo step.
    fn replace(&mut self, range: Range<usize>, text: &str) -> Option<EditInfo>
    where
        Self: Sized,
    {
        self.transact(|doc| {
            doc.delete(range.clone());
            doc.insert(range.start, text)
        })
    }

    /// Run `f` with every edit it makes collapsed into one undo step.
    fn transact<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.buffer_mut().begin_group();
        let result = f(self);
        self.buffer_mut().end_group();
        result
    }

    fn undo(&mut self) -> bool {
        self.buffer_mut().undo()
    }

    fn redo(&mut self) -> bool {
        self.buffer_mut().redo()
    }

    fn can_undo(&self) -> bool {
        self.buffer().can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer().can_redo()
    }
}

/// Buffer plus caret and selection held as plain fields.
#[derive(Clone, Default)]
pub struct PlainEditor<T> {
    buffer: T,
    cursor: usize,
    selection: Option<Selection>,
}

impl<T: TextBuffer + UndoManager> PlainEditor<T> {
    pub fn new(buffer: T) -> Self {
        Self {
            buffer,
            cursor: 0,
            selection: None,
        }
    }
}

impl<T: TextBuffer + UndoManager> EditorDocument for PlainEditor<T> {
    type Buffer = T;

    fn buffer(&self) -> &T {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut T {
        &mut self.buffer
    }

    fn cursor_offset(&self) -> usize {
        self.cursor
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        self.cursor = offset;
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }
}
