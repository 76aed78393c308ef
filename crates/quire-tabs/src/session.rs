//! Editing session: one markdown document plus its change pipeline.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use quire_common::{QuireConfig, QuireError};
use quire_editor_core::{
    Command, Document, EditorAction, EditorDocument, EditorRope, PlainEditor, Range, Selection,
    Snapshot, UndoableBuffer, execute_action,
};
use tokio::time::Instant;

use crate::pipeline::{ChangeCallback, ChangePipeline};

/// Process-unique session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate the next id. Ids are never reused within a process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Lock a shared document, recovering the data if a holder panicked.
pub(crate) fn lock_document(document: &Mutex<Document>) -> MutexGuard<'_, Document> {
    document.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A live document with its command surface.
///
/// Every call that changes the text is reported through the session's
/// [`ChangePipeline`]. Cursor and selection moves are not.
pub struct EditingSession {
    id: SessionId,
    document: Arc<Mutex<Document>>,
    last_key_input: Option<Instant>,
    pipeline: ChangePipeline,
}

impl EditingSession {
    pub fn new(debounce: Duration, undo_depth: usize, callback: ChangeCallback) -> Self {
        let id = SessionId::next();
        let document = Arc::new(Mutex::new(PlainEditor::new(UndoableBuffer::new(
            EditorRope::new(),
            undo_depth,
        ))));
        let pipeline = ChangePipeline::new(id, Arc::clone(&document), debounce, callback);
        tracing::debug!(session = %id, "session created");
        Self {
            id,
            document,
            last_key_input: None,
            pipeline,
        }
    }

    pub fn from_config(config: &QuireConfig, callback: ChangeCallback) -> Self {
        Self::new(config.debounce(), config.undo_depth, callback)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Record a raw keystroke. Call before the edit it produces.
    pub fn on_key_input(&mut self) {
        self.last_key_input = Some(Instant::now());
    }

    pub fn last_key_input(&self) -> Option<Instant> {
        self.last_key_input
    }

    /// Keystroke path: record the input, then replace the selection (or
    /// insert at the cursor) with `text`.
    pub fn type_text(&mut self, text: &str) -> bool {
        self.on_key_input();
        let range = self.edit_range();
        self.apply(EditorAction::Insert {
            text: text.to_owned(),
            range,
        })
    }

    /// Apply a toolbar command. Returns whether the text changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        tracing::debug!(session = %self.id, command = %command, "dispatch");
        self.apply(EditorAction::from(command))
    }

    /// Apply a command given by wire name, as the toolbar boundary sends it.
    ///
    /// Unknown names and bad payloads are rejected before the document is
    /// touched.
    pub fn dispatch_named(
        &mut self,
        name: &str,
        payload: Option<&str>,
    ) -> Result<bool, QuireError> {
        let command = Command::parse(name, payload).inspect_err(|err| {
            tracing::warn!(session = %self.id, command = name, error = %err, "command rejected");
        })?;
        Ok(self.dispatch(command))
    }

    /// Apply an editing action. Returns whether the text changed.
    pub fn apply(&mut self, action: EditorAction) -> bool {
        let changed = {
            let mut doc = lock_document(&self.document);
            let before = doc.revision();
            execute_action(&mut *doc, &action);
            doc.revision() != before
        };

        if changed {
            self.pipeline.on_mutation(self.last_key_input);
        } else {
            tracing::trace!(session = %self.id, action = action.label(), "no text change");
        }
        changed
    }

    /// Plain text and markup as of now, ignoring any pending markup job.
    pub fn read_snapshot(&self) -> Snapshot {
        lock_document(&self.document).snapshot()
    }

    pub fn cursor(&self) -> usize {
        lock_document(&self.document).cursor_offset()
    }

    pub fn selection(&self) -> Option<Selection> {
        lock_document(&self.document).selection()
    }

    /// Place the selection; the cursor follows its head.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        let mut doc = lock_document(&self.document);
        let len = doc.len_chars();
        let selection =
            selection.map(|sel| Selection::new(sel.anchor.min(len), sel.head.min(len)));
        if let Some(sel) = selection {
            doc.set_cursor_offset(sel.head);
        }
        doc.set_selection(selection);
    }

    pub fn can_undo(&self) -> bool {
        lock_document(&self.document).can_undo()
    }

    pub fn can_redo(&self) -> bool {
        lock_document(&self.document).can_redo()
    }

    /// Run any pending markup extraction now.
    pub fn flush(&mut self) -> bool {
        self.pipeline.flush()
    }

    pub fn has_pending(&self) -> bool {
        self.pipeline.has_pending()
    }

    fn edit_range(&self) -> Range {
        let doc = lock_document(&self.document);
        match doc.selection() {
            Some(sel) => Range::new(sel.start(), sel.end()),
            None => Range::caret(doc.cursor_offset()),
        }
    }
}

impl fmt::Debug for EditingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditingSession")
            .field("id", &self.id)
            .field("last_key_input", &self.last_key_input)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
