//! Tabs: an id, display attributes and the editing session they own.

use std::fmt;

use quire_common::{QuireConfig, TabTemplate};
use smol_str::SmolStr;
use uuid::Uuid;

use crate::pipeline::ChangeCallback;
use crate::session::EditingSession;

/// Opaque tab identifier, unique among open tabs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(SmolStr);

impl TabId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// A fresh `tab-<uuid v7>` id.
    pub fn generate() -> Self {
        Self(SmolStr::new(format!("tab-{}", Uuid::now_v7())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TabId {
    fn eq(&self, other: &str) -> bool {
        self.0.as_str() == other
    }
}

impl PartialEq<&str> for TabId {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_str() == *other
    }
}

/// One editing pane.
///
/// `icon` and `color` are carried for the presentation layer only.
#[derive(Debug)]
pub struct Tab {
    id: TabId,
    title: String,
    icon: String,
    color: String,
    session: EditingSession,
}

impl Tab {
    pub(crate) fn from_template(
        id: TabId,
        template: &TabTemplate,
        config: &QuireConfig,
        callback: ChangeCallback,
    ) -> Self {
        Self {
            id,
            title: template.title.clone(),
            icon: template.icon.clone(),
            color: template.color.clone(),
            session: EditingSession::from_config(config, callback),
        }
    }

    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditingSession {
        &mut self.session
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}
