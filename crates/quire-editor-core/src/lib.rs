//! quire-editor-core: Pure Rust document logic without framework dependencies.
//!
//! This crate provides:
//! - `TextBuffer` trait for text storage abstraction
//! - `EditorRope` - ropey-backed implementation
//! - `UndoableBuffer<T>` - undo/redo with grouped steps
//! - `EditorDocument` - cursor, selection and editing over any buffer
//! - `Command` - the closed toolbar command set
//! - `execute_action` - formatting and editing, all generic over `EditorDocument`
//! - `plain_text` - visible text of the markdown source

pub mod actions;
pub mod command;
pub mod document;
pub mod execute;
pub mod extract;
pub mod text;
pub mod text_helpers;
pub mod types;
pub mod undo;

pub use actions::{EditorAction, ListKind, Mark, Range};
pub use command::{Command, LinkUrl};
pub use document::{EditorDocument, PlainEditor};
pub use execute::execute_action;
pub use extract::plain_text;
pub use quire_common::CommandError;
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer};
pub use types::{EditInfo, Selection, Snapshot};
pub use undo::{UndoManager, UndoableBuffer};

/// The buffer stack every session uses.
pub type Document = PlainEditor<UndoableBuffer<EditorRope>>;
