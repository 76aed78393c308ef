//! Change pipeline: turns document mutations into text and markup reports.
//!
//! Plain text is reported synchronously on every mutation. Markup is
//! extracted once the session has been quiet for the debounce window; each
//! mutation aborts the pending job and schedules a fresh one.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quire_common::perf;
use quire_editor_core::{Document, EditorDocument, plain_text};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::session::{SessionId, lock_document};

/// Histogram receiving keystroke-to-report latency samples.
pub const TYPING_LATENCY_METRIC: &str = "quire_typing_latency_ms";

/// Receives every report produced by a pipeline.
pub type ChangeCallback = Arc<dyn Fn(&DocumentChange) + Send + Sync>;

/// Which artifact a [`DocumentChange`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Synchronous plain-text report.
    Text,
    /// Debounced markup report.
    Markup,
}

/// One report from a session's pipeline.
///
/// Text reports leave `markup` empty; markup reports leave `text` empty and
/// never carry a latency.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentChange {
    pub session: SessionId,
    pub kind: ChangeKind,
    pub text: String,
    pub markup: String,
    /// Time since the last key input, when one was recorded and is positive.
    pub latency: Option<Duration>,
}

impl DocumentChange {
    pub fn text(session: SessionId, text: String, latency: Option<Duration>) -> Self {
        Self {
            session,
            kind: ChangeKind::Text,
            text,
            markup: String::new(),
            latency,
        }
    }

    pub fn markup(session: SessionId, markup: String) -> Self {
        Self {
            session,
            kind: ChangeKind::Markup,
            text: String::new(),
            markup,
            latency: None,
        }
    }

    pub fn is_markup(&self) -> bool {
        self.kind == ChangeKind::Markup
    }
}

/// Per-session report scheduler.
///
/// Must be driven from inside a tokio runtime.
pub struct ChangePipeline {
    session: SessionId,
    document: Arc<Mutex<Document>>,
    debounce: Duration,
    callback: ChangeCallback,
    pending: Option<JoinHandle<()>>,
}

impl ChangePipeline {
    pub fn new(
        session: SessionId,
        document: Arc<Mutex<Document>>,
        debounce: Duration,
        callback: ChangeCallback,
    ) -> Self {
        Self {
            session,
            document,
            debounce,
            callback,
            pending: None,
        }
    }

    /// React to a committed mutation.
    ///
    /// Reports plain text right away, then (re)starts the markup timer.
    pub fn on_mutation(&mut self, last_key_input: Option<Instant>) {
        let source = lock_document(&self.document).content_string();
        let text = perf::measure("extract-text", || plain_text(&source));

        let latency = last_key_input
            .map(|at| at.elapsed())
            .filter(|elapsed| !elapsed.is_zero());
        if let Some(latency) = latency {
            let latency_ms = latency.as_secs_f64() * 1000.0;
            tracing::debug!(session = %self.session, latency_ms, "typing latency");
            metrics::histogram!(TYPING_LATENCY_METRIC).record(latency_ms);
        }

        (self.callback)(&DocumentChange::text(self.session, text, latency));
        self.schedule_markup();
    }

    fn schedule_markup(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let session = self.session;
        let document = Arc::clone(&self.document);
        let callback = Arc::clone(&self.callback);
        let deadline = Instant::now() + self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            emit_markup(session, &document, &callback);
        }));
    }

    /// Whether a markup job is scheduled and has not run yet.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Run the pending markup extraction now. Returns false if none was pending.
    pub fn flush(&mut self) -> bool {
        if !self.cancel() {
            return false;
        }
        emit_markup(self.session, &self.document, &self.callback);
        true
    }

    /// Drop the pending markup extraction without running it.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::debug!(session = %self.session, "markup job cancelled");
                true
            }
            _ => false,
        }
    }
}

impl Drop for ChangePipeline {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ChangePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePipeline")
            .field("session", &self.session)
            .field("debounce", &self.debounce)
            .field("pending", &self.has_pending())
            .finish_non_exhaustive()
    }
}

/// Extract markup from the document as it is now and report it.
fn emit_markup(session: SessionId, document: &Mutex<Document>, callback: &ChangeCallback) {
    let markup = perf::measure("extract-markup", || {
        lock_document(document).content_string()
    });
    tracing::debug!(%session, len = markup.len(), "markup extracted");
    callback(&DocumentChange::markup(session, markup));
}
