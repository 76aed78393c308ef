//! quire-common: ambient pieces shared by the quire crates.
//!
//! - `config` - `QuireConfig` with env and file loading
//! - `error` - error taxonomy (`QuireError`, `CommandError`, `ConfigError`)
//! - `perf` - timing helpers feeding tracing and metrics
//! - `telemetry` - console tracing setup (feature `telemetry`)

pub mod config;
pub mod error;
pub mod perf;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use config::{QuireConfig, TabTemplate};
pub use error::{CommandError, ConfigError, QuireError, Result};
