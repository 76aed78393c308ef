//! quire-tabs: tab lifecycle and the editing pipeline behind each tab.
//!
//! - `TabRegistry` - ordered tabs with exactly one active while any exist
//! - `EditingSession` - one document, its commands and key-input clock
//! - `ChangePipeline` - synchronous text reports, debounced markup reports
//!
//! Sessions schedule markup extraction on the tokio runtime they are used
//! from; a current-thread runtime is the intended host.

pub mod pipeline;
pub mod registry;
pub mod session;
pub mod tab;

pub use pipeline::{ChangeCallback, ChangeKind, ChangePipeline, DocumentChange};
pub use quire_common::{QuireConfig, TabTemplate};
pub use quire_editor_core::{Command, EditorAction, Range, Selection, Snapshot};
pub use registry::TabRegistry;
pub use session::{EditingSession, SessionId};
pub use tab::{Tab, TabId};
