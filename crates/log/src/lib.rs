//! # parz-log
//!
//! Subscriber setup for binaries, tests and benchmarks that run parz pipelines.
//!
//! `parz-pipeline` only emits `tracing` events; nothing is printed until a
//! subscriber is installed. This crate installs one from a small
//! [`Config`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! fn main() -> Result<(), parz_log::LogError> {
//!     // PARZ_LOG=parz_pipeline=trace PARZ_LOG_FORMAT=json
//!     parz_log::init_from_env()?;
//!
//!     tracing::info!(port = 8080, "service starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Initialize with a custom configuration
pub fn init(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize from `PARZ_LOG` / `RUST_LOG` and `PARZ_LOG_FORMAT`
pub fn init_from_env() -> LogResult<()> {
    init(Config::from_env())
}

/// Auto-detect and initialize the best logging configuration
///
/// Uses the environment when a filter variable is set, otherwise
/// [`Config::development`] in debug builds and [`Config::production`] in
/// release builds.
pub fn auto_init() -> LogResult<()> {
    if std::env::var_os("PARZ_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_from_env()
    } else if cfg!(debug_assertions) {
        init(Config::development())
    } else {
        init(Config::production())
    }
}
