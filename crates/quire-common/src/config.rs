//! Runtime configuration: debounce window, undo depth and tab templates.
//!
//! Defaults can be overridden from `QUIRE_*` environment variables or loaded
//! from a `.json` or `.toml` file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Display attributes used when creating a tab.
///
/// `icon` and `color` are opaque to the core; the presentation layer
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTemplate {
    /// Fixed id for default tabs. `None` means one is generated.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub icon: String,
    pub color: String,
}

impl TabTemplate {
    pub fn new(
        id: Option<&str>,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.map(str::to_owned),
            title: title.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuireConfig {
    /// Quiet period before markup is extracted, in milliseconds.
    pub debounce_ms: u64,
    /// Maximum undo steps kept per session.
    pub undo_depth: usize,
    /// Template for tabs created by `add_tab`.
    pub new_tab: TabTemplate,
    /// Tabs present at startup, in display order.
    pub default_tabs: Vec<TabTemplate>,
}

impl QuireConfig {
    pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
    pub const DEFAULT_UNDO_DEPTH: usize = 100;

    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `QUIRE_DEBOUNCE_MS`: markup debounce window (default: 200)
    /// - `QUIRE_UNDO_DEPTH`: undo steps per session (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of an existing configuration.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(ms) = parse_env::<u64>("QUIRE_DEBOUNCE_MS")? {
            self.debounce_ms = ms;
        }
        if let Some(depth) = parse_env::<usize>("QUIRE_UNDO_DEPTH")? {
            self.undo_depth = depth;
        }
        Ok(self)
    }

    /// Load configuration from a `.json` or `.toml` file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = path.extension().and_then(|ext| ext.to_str());
        if !matches!(format, Some("json") | Some("toml")) {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            Some("json") => serde_json::from_str(&contents)?,
            _ => toml::from_str(&contents)?,
        };
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

impl Default for QuireConfig {
    /// The two document tabs the authoring surface opens with.
    fn default() -> Self {
        Self {
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
            undo_depth: Self::DEFAULT_UNDO_DEPTH,
            new_tab: TabTemplate::new(None, "새 탭", "fas fa-plus", "#999"),
            default_tabs: vec![
                TabTemplate::new(
                    Some("test-case"),
                    "테스트케이스 명세서",
                    "fas fa-clipboard-list",
                    "#667eea",
                ),
                TabTemplate::new(
                    Some("req-def"),
                    "요구사항정의서",
                    "fas fa-file-excel",
                    "#4caf50",
                ),
            ],
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}
