//! Diagnostic logging setup for the command-line front end

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// How much diagnostic output to emit on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// `RUST_LOG` if set, otherwise warnings
    Normal,
    /// Debug events from this crate
    Verbose,
}

impl Verbosity {
    /// Pick a level from the quiet and verbose flags; quiet wins
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directives for this level
    pub fn filter(self) -> EnvFilter {
        match self {
            Self::Quiet => EnvFilter::new("error"),
            Self::Verbose => EnvFilter::new(format!("{DEFAULT_LOG_FILTER},patterncss=debug")),
            Self::Normal => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

/// Install a stderr subscriber; later calls are ignored
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(verbosity.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::trace!("subscriber already installed");
    }
}
