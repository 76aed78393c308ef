//! Error types shared across the quire crates.
//!
//! Registry and session operations never fail; unknown ids are no-ops. What
//! can fail is building a command from host input and loading configuration.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for quire operations
#[derive(Debug, Error, Diagnostic)]
pub enum QuireError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),
}

/// Rejections raised while turning toolbar input into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[non_exhaustive]
pub enum CommandError {
    #[error("unknown editor command `{0}`")]
    #[diagnostic(
        code(command::unknown),
        help("expected one of: toggle-bold, toggle-italic, toggle-underline, toggle-strikethrough, set-heading-1, set-heading-2, toggle-bullet-list, toggle-numbered-list, insert-link")
    )]
    Unknown(String),

    #[error("command `{command}` requires a payload")]
    #[diagnostic(code(command::missing_payload))]
    MissingPayload { command: &'static str },

    #[error("link URL is empty")]
    #[diagnostic(code(command::empty_link_url))]
    EmptyLinkUrl,
}

/// Configuration loading errors
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    #[diagnostic(code(config::invalid_env))]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format for {}", path.display())]
    #[diagnostic(code(config::format), help("use a .json or .toml file"))]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse JSON config")]
    #[diagnostic(code(config::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML config")]
    #[diagnostic(code(config::toml))]
    Toml(#[from] toml::de::Error),
}

pub type Result<T, E = QuireError> = std::result::Result<T, E>;
