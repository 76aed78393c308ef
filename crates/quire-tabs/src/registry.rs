//! Ordered tab collection with a single active tab.
//!
//! Whenever tabs exist, exactly one of them is active. Operations that name
//! an unknown tab change nothing.

use std::collections::HashSet;

use quire_common::QuireConfig;

use crate::pipeline::ChangeCallback;
use crate::tab::{Tab, TabId};

/// Gauge tracking how many tabs are open.
pub const OPEN_TABS_METRIC: &str = "quire_open_tabs";

pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    config: QuireConfig,
    callback: ChangeCallback,
}

impl TabRegistry {
    /// Registry holding the configured default tabs, the first one active.
    pub fn new(config: QuireConfig, callback: ChangeCallback) -> Self {
        let mut registry = Self::empty(config, callback);
        let mut seen = HashSet::new();

        for template in registry.config.default_tabs.clone() {
            let id = match template.id.as_deref() {
                Some(id) if seen.insert(id.to_owned()) => TabId::new(id),
                Some(id) => {
                    tracing::warn!(tab = id, "duplicate default tab id, generating one");
                    TabId::generate()
                }
                None => TabId::generate(),
            };
            let tab = Tab::from_template(
                id,
                &template,
                &registry.config,
                registry.callback.clone(),
            );
            registry.tabs.push(tab);
        }

        registry.active = registry.tabs.first().map(|tab| tab.id().clone());
        registry.record_len();
        registry
    }

    /// Registry with no tabs.
    pub fn empty(config: QuireConfig, callback: ChangeCallback) -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            config,
            callback,
        }
    }

    pub fn config(&self) -> &QuireConfig {
        &self.config
    }

    /// Append a new tab with a fresh id and make it active.
    pub fn add_tab(&mut self) -> &mut Tab {
        let id = TabId::generate();
        let tab = Tab::from_template(
            id.clone(),
            &self.config.new_tab,
            &self.config,
            self.callback.clone(),
        );
        tracing::debug!(tab = %id, session = %tab.session().id(), "tab added");

        self.tabs.push(tab);
        self.active = Some(id);
        self.record_len();

        let last = self.tabs.len() - 1;
        &mut self.tabs[last]
    }

    /// Remove a tab, handing it back to the caller.
    ///
    /// If it was active, the first remaining tab becomes active. Dropping the
    /// returned tab tears down its session.
    pub fn remove_tab(&mut self, id: &str) -> Option<Tab> {
        let Some(index) = self.position(id) else {
            tracing::debug!(tab = id, "remove_tab: unknown tab");
            return None;
        };

        let removed = self.tabs.remove(index);
        if self.active.as_ref() == Some(removed.id()) {
            self.active = self.tabs.first().map(|tab| tab.id().clone());
        }
        tracing::debug!(
            tab = %removed.id(),
            active = ?self.active.as_ref().map(TabId::as_str),
            "tab removed"
        );
        self.record_len();
        Some(removed)
    }

    /// Make `id` the active tab. Returns false for unknown ids.
    pub fn switch_to(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.active = Some(self.tabs[index].id().clone());
                true
            }
            None => {
                tracing::debug!(tab = id, "switch_to: unknown tab");
                false
            }
        }
    }

    /// Change a tab's title. Returns false for unknown ids.
    pub fn rename_tab(&mut self, id: &str, title: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tab.set_title(title.into());
                true
            }
            None => {
                tracing::debug!(tab = id, "rename_tab: unknown tab");
                false
            }
        }
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    pub fn active(&self) -> Option<&Tab> {
        let id = self.active.as_ref()?;
        self.get(id.as_str())
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        let index = self.position(self.active.as_ref()?.as_str())?;
        Some(&mut self.tabs[index])
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    fn record_len(&self) {
        metrics::gauge!(OPEN_TABS_METRIC).set(self.tabs.len() as f64);
    }
}

impl std::fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabRegistry")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
