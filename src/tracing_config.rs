//! Tracing setup for hosts embedding the completion engine.
//!
//! The engine crates only emit `tracing` events (activation, gathering,
//! truncated context scans, commits). A host that wants to see them calls
//! [`init_tracing`], which reads two environment variables:
//!
//! - `ACOMP_LOG`: filter directives with `RUST_LOG` syntax, e.g. `debug` or
//!   `acomp_engine::context=trace`. `RUST_LOG` is used when it is unset.
//! - `ACOMP_LOG_FORMAT`: `text` (default), `tree` for indented
//!   `tracing-tree` output, or `json` for one object per event.
//!
//! ```bash
//! ACOMP_LOG=acomp_engine=debug ACOMP_LOG_FORMAT=tree my-editor
//! ```
//!
//! Nothing is installed when neither filter variable is set. Output goes to
//! stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "ACOMP_LOG";
pub const LOG_FORMAT_ENV: &str = "ACOMP_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively. Unknown names mean `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Subscriber settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// Filter directives.
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Read the settings from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`. `None` when no filter is configured.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(LOG_ENV).or_else(|| lookup(FALLBACK_LOG_ENV))?;
        let format = lookup(LOG_FORMAT_ENV).map_or(LogFormat::Text, |name| LogFormat::parse(&name));
        Some(Self { directives, format })
    }

    /// Install the global subscriber. Returns `false` when one is already set.
    pub fn try_init(&self) -> bool {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Tree => {
                let layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(layer).try_init().is_ok()
            }
            LogFormat::Json => {
                let layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(layer).try_init().is_ok()
            }
            LogFormat::Text => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok(),
        }
    }
}

/// Install a subscriber when `ACOMP_LOG` or `RUST_LOG` is set.
///
/// Returns whether a subscriber was installed by this call.
pub fn init_tracing() -> bool {
    TracingSettings::from_env().is_some_and(|settings| settings.try_init())
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
