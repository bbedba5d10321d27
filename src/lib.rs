//! # Codebase Tools
//!
//! Bulk maintenance utilities for source trees. Two binaries share this
//! library:
//!
//! - `codebase-format` runs an external formatter (clang-format by default)
//!   in place on every matching file.
//! - `codebase-replace` substitutes one literal string for another, line by
//!   line, in every matching file.
//!
//! Both walk a root directory recursively, filter files with glob patterns,
//! and default to a dry run that only reports how many files would change.
//!
//! ## Example
//!
//! ```no_run
//! use codebase_tools::{config::Config, core::{run, Replacer}};
//!
//! let config = Config {
//!     dirs: vec!["src".into()],
//!     file_filters: vec!["*.cpp".to_string()],
//!     ..Config::default()
//! };
//! let replacer = Replacer::new("NULL".to_string(), "nullptr".to_string());
//! let summary = run(&config, &replacer, std::io::stdout())?;
//! println!("{} files", summary.files_processed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostic logging on stderr.
///
/// Stdout is reserved for the progress report, so the default level only
/// lets warnings through.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
