//! Log output for the command-line tools.
//!
//! Everything goes to stderr so stdout carries only the converted output.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// How much the tools say while they work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Failures and warnings, plus notable info.
    #[default]
    Normal,

    /// Per-record and per-line progress.
    Debug,
}

impl Verbosity {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Normal }
    }

    /// Default filter directive for this verbosity.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Normal => "info",
            Self::Debug => "debug",
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence when set.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if verbosity == Verbosity::Debug {
        info!("Setting log level to DEBUG");
    }
}
