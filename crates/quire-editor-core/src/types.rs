//! Selection, edit record and snapshot types.

use std::ops::Range;

/// Text selection with anchor and head positions.
///
/// The anchor stays put while the head follows the cursor, so the two may be
/// in either order. Use `start()` and `end()` for ordered bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Ordered char range.
    pub fn to_range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

/// The most recent primitive edit applied to a buffer.
#[derive(Clone, Copy, Debug)]
pub struct EditInfo {
    /// Char offset of the edit.
    pub pos: usize,
    pub inserted_len: usize,
    pub deleted_len: usize,
}

/// Read-only view of a document's committed state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Visible text, formatting syntax removed.
    pub text: String,
    /// Markdown source.
    pub markup: String,
}
