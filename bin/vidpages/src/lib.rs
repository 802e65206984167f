//! vidpages CLI Library
//!
//! This library provides the command implementations for the vidpages page
//! generator. It is used by the binary entry point while also exposing the
//! commands for integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (generate, check)
//!
//! # Example
//!
//! ```no_run
//! use vidpages::cmd::{self, InputArgs};
//!
//! // Generate pages using ./vidpages.toml or the built-in defaults
//! cmd::generate::run(None, &InputArgs::default()).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use vidpages_core::{Config, VideoRecord};
pub use vidpages_generator::{Generator, Reporter, RunSummary};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// Events go to stderr so they never interleave with the page report on
/// stdout.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
