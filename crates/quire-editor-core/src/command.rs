//! Toolbar command set.
//!
//! The toolbar and link affordance talk to a session only through
//! [`Command`]. The set is closed: an unknown name or a bad payload is
//! rejected while the command is built, so a session never sees one.

use std::fmt;
use std::str::FromStr;

use quire_common::CommandError;

/// A validated link target: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkUrl(String);

impl LinkUrl {
    pub fn new(url: &str) -> Result<Self, CommandError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CommandError::EmptyLinkUrl);
        }
        Ok(Self(url.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formatting and structural commands a toolbar can issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleStrikethrough,
    SetHeading1,
    SetHeading2,
    ToggleBulletList,
    ToggleNumberedList,
    InsertLink(LinkUrl),
}

impl Command {
    /// Wire names of every command, in toolbar order.
    pub const NAMES: [&'static str; 9] = [
        "toggle-bold",
        "toggle-italic",
        "toggle-underline",
        "toggle-strikethrough",
        "set-heading-1",
        "set-heading-2",
        "toggle-bullet-list",
        "toggle-numbered-list",
        "insert-link",
    ];

    /// Build an `insert-link` command from raw user input.
    pub fn insert_link(url: &str) -> Result<Self, CommandError> {
        Ok(Self::InsertLink(LinkUrl::new(url)?))
    }

    /// Parse a wire name plus optional payload.
    ///
    /// Only `insert-link` takes a payload; it is ignored for the others.
    pub fn parse(name: &str, payload: Option<&str>) -> Result<Self, CommandError> {
        let command = match name {
            "toggle-bold" => Self::ToggleBold,
            "toggle-italic" => Self::ToggleItalic,
            "toggle-underline" => Self::ToggleUnderline,
            "toggle-strikethrough" => Self::ToggleStrikethrough,
            "set-heading-1" => Self::SetHeading1,
            "set-heading-2" => Self::SetHeading2,
            "toggle-bullet-list" => Self::ToggleBulletList,
            "toggle-numbered-list" => Self::ToggleNumberedList,
            "insert-link" => {
                let url = payload.ok_or(CommandError::MissingPayload {
                    command: "insert-link",
                })?;
                Self::insert_link(url)?
            }
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(command)
    }

    /// The wire name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleBold => "toggle-bold",
            Self::ToggleItalic => "toggle-italic",
            Self::ToggleUnderline => "toggle-underline",
            Self::ToggleStrikethrough => "toggle-strikethrough",
            Self::SetHeading1 => "set-heading-1",
            Self::SetHeading2 => "set-heading-2",
            Self::ToggleBulletList => "toggle-bullet-list",
            Self::ToggleNumberedList => "toggle-numbered-list",
            Self::InsertLink(_) => "insert-link",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
