//! Editor actions.
//!
//! `EditorAction` represents semantic editing operations, decoupled from how
//! they're triggered (keyboard, toolbar, programmatic).

use crate::command::{Command, LinkUrl};

/// A range in the document, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Normalize, then pull both ends back inside a document of `len` chars.
    pub fn clamp(self, len: usize) -> Self {
        let range = self.normalize();
        Self {
            start: range.start.min(len),
            end: range.end.min(len),
        }
    }
}

/// Inline text marks and their markdown delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Mark {
    /// Opening and closing delimiters.
    ///
    /// Markdown has no underline, so it round-trips as inline HTML.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Underline => ("<u>", "</u>"),
            Self::Strikethrough => ("~~", "~~"),
        }
    }
}

/// List flavours a line can be toggled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// All possible editor actions.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // === Text Insertion ===
    /// Insert text at the given range (replacing any selected content).
    Insert { text: String, range: Range },

    /// Insert a paragraph break (Enter).
    InsertParagraph { range: Range },

    // === Deletion ===
    /// Delete content backward (Backspace).
    DeleteBackward { range: Range },

    /// Delete content forward (Delete key).
    DeleteForward { range: Range },

    /// Delete word backward (Ctrl/Alt+Backspace).
    DeleteWordBackward { range: Range },

    /// Delete word forward (Ctrl/Alt+Delete).
    DeleteWordForward { range: Range },

    // === History ===
    /// Undo the last change.
    Undo,

    /// Redo the last undone change.
    Redo,

    // === Formatting ===
    /// Toggle an inline mark on the selection (or the word at the cursor).
    ToggleMark(Mark),

    /// Make every touched line a heading of this level, or plain again if
    /// they already are.
    ToggleHeading { level: u8 },

    /// Toggle a list prefix on every touched line.
    ToggleList(ListKind),

    /// Wrap the selection (or word) in a link.
    InsertLink { url: LinkUrl },

    // === Selection ===
    /// Select all content.
    SelectAll,

    // === Navigation ===
    /// Move cursor to position.
    MoveCursor { offset: usize },

    /// Extend selection to position.
    ExtendSelection { offset: usize },
}

impl EditorAction {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::InsertParagraph { .. } => "insert-paragraph",
            Self::DeleteBackward { .. } => "delete-backward",
            Self::DeleteForward { .. } => "delete-forward",
            Self::DeleteWordBackward { .. } => "delete-word-backward",
            Self::DeleteWordForward { .. } => "delete-word-forward",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::ToggleMark(_) => "toggle-mark",
            Self::ToggleHeading { .. } => "toggle-heading",
            Self::ToggleList(_) => "toggle-list",
            Self::InsertLink { .. } => "insert-link",
            Self::SelectAll => "select-all",
            Self::MoveCursor { .. } => "move-cursor",
            Self::ExtendSelection { .. } => "extend-selection",
        }
    }
}

impl From<Command> for EditorAction {
    fn from(command: Command) -> Self {
        match command {
            Command::ToggleBold => Self::ToggleMark(Mark::Bold),
            Command::ToggleItalic => Self::ToggleMark(Mark::Italic),
            Command::ToggleUnderline => Self::ToggleMark(Mark::Underline),
            Command::ToggleStrikethrough => Self::ToggleMark(Mark::Strikethrough),
            Command::SetHeading1 => Self::ToggleHeading { level: 1 },
            Command::SetHeading2 => Self::ToggleHeading { level: 2 },
            Command::ToggleBulletList => Self::ToggleList(ListKind::Bullet),
            Command::ToggleNumberedList => Self::ToggleList(ListKind::Numbered),
            Command::InsertLink(url) => Self::InsertLink { url },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalize() {
        let r = Range::new(8, 3).normalize();
        assert_eq!((r.start, r.end), (3, 8));
        assert_eq!(r.len(), 5);
        assert!(Range::caret(4).is_caret());
    }

    #[test]
    fn test_range_clamp() {
        assert_eq!(Range::new(12, 3).clamp(5), Range::new(3, 5));
        assert_eq!(Range::caret(10).clamp(2), Range::caret(2));
        assert_eq!(Range::new(1, 2).clamp(5), Range::new(1, 2));
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(
            EditorAction::from(Command::ToggleUnderline),
            EditorAction::ToggleMark(Mark::Underline)
        );
        assert_eq!(
            EditorAction::from(Command::SetHeading2),
            EditorAction::ToggleHeading { level: 2 }
        );
        assert_eq!(
            EditorAction::from(Command::ToggleNumberedList),
            EditorAction::ToggleList(ListKind::Numbered)
        );
    }
}
