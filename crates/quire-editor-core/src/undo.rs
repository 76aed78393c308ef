//! Bounded undo history layered over a [`TextBuffer`].

use std::collections::VecDeque;
use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::text::TextBuffer;
use crate::types::EditInfo;

/// Undo/redo over some buffer.
pub trait UndoManager {
    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Revert the newest step. Returns false when there is nothing to undo.
    fn undo(&mut self) -> bool;

    /// Reapply the newest undone step. Returns false when there is nothing to redo.
    fn redo(&mut self) -> bool;

    /// Open a step that absorbs every edit until the matching `end_group`.
    /// Groups nest; only the outermost close commits.
    fn begin_group(&mut self) {}

    fn end_group(&mut self) {}
}

/// A primitive edit: `removed` was replaced by `added` at `pos`.
#[derive(Debug, Clone)]
struct Change {
    pos: usize,
    removed: SmolStr,
    added: SmolStr,
}

impl Change {
    fn revert(&self, buffer: &mut impl TextBuffer) {
        buffer.delete(self.pos..self.pos + self.added.chars().count());
        buffer.insert(self.pos, &self.removed);
    }

    fn reapply(&self, buffer: &mut impl TextBuffer) {
        buffer.delete(self.pos..self.pos + self.removed.chars().count());
        buffer.insert(self.pos, &self.added);
    }
}

/// Buffer wrapper recording every edit for undo.
///
/// History holds at most `depth` steps; the oldest step is forgotten first.
#[derive(Clone)]
pub struct UndoableBuffer<T> {
    buffer: T,
    done: VecDeque<Vec<Change>>,
    undone: Vec<Vec<Change>>,
    group: Option<(usize, Vec<Change>)>,
    depth: usize,
}

impl<T: TextBuffer + Default> Default for UndoableBuffer<T> {
    fn default() -> Self {
        Self::new(T::default(), 100)
    }
}

impl<T: TextBuffer> UndoableBuffer<T> {
    pub fn new(buffer: T, depth: usize) -> Self {
        Self {
            buffer,
            done: VecDeque::new(),
            undone: Vec::new(),
            group: None,
            depth,
        }
    }

    fn record(&mut self, change: Change) {
        self.undone.clear();
        match &mut self.group {
            Some((_, changes)) => changes.push(change),
            None => self.commit(vec![change]),
        }
    }

    fn commit(&mut self, step: Vec<Change>) {
        if self.depth == 0 {
            return;
        }
        if self.done.len() == self.depth {
            self.done.pop_front();
        }
        self.done.push_back(step);
    }
}

impl<T: TextBuffer> TextBuffer for UndoableBuffer<T> {
    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        if text.is_empty() || char_offset > self.buffer.len_chars() {
            return;
        }
        self.buffer.insert(char_offset, text);
        self.record(Change {
            pos: char_offset,
            removed: SmolStr::default(),
            added: text.to_smolstr(),
        });
    }

    fn delete(&mut self, char_range: Range<usize>) {
        let Some(removed) = self.buffer.slice(char_range.clone()) else {
            return;
        };
        if removed.is_empty() {
            return;
        }
        let pos = char_range.start;
        self.buffer.delete(char_range);
        self.record(Change {
            pos,
            removed,
            added: SmolStr::default(),
        });
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        self.buffer.slice(char_range)
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.buffer.char_at(char_offset)
    }

    fn to_string(&self) -> String {
        self.buffer.to_string()
    }

    fn last_edit(&self) -> Option<&EditInfo> {
        self.buffer.last_edit()
    }

    fn revision(&self) -> u64 {
        self.buffer.revision()
    }
}

impl<T: TextBuffer> UndoManager for UndoableBuffer<T> {
    fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(step) = self.done.pop_back() else {
            return false;
        };
        step.iter().rev().for_each(|change| change.revert(&mut self.buffer));
        self.undone.push(step);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(step) = self.undone.pop() else {
            return false;
        };
        step.iter().for_each(|change| change.reapply(&mut self.buffer));
        self.done.push_back(step);
        true
    }

    fn begin_group(&mut self) {
        match &mut self.group {
            Some((nesting, _)) => *nesting += 1,
            None => self.group = Some((1, Vec::new())),
        }
    }

    fn end_group(&mut self) {
        let Some((nesting, _)) = &mut self.group else {
            return;
        };
        *nesting -= 1;
        if *nesting > 0 {
            return;
        }
        if let Some((_, step)) = self.group.take().filter(|(_, step)| !step.is_empty()) {
            self.commit(step);
        }
    }
}
