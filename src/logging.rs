//! Logging configuration for streamkeep
//!
//! Diagnostics go through `tracing`. The CLI logs to stderr; the TUI owns the
//! terminal, so it logs to a file in the base directory instead.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Debug and above
    Verbose,
    /// Everything
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from the CLI flags. `quiet` wins over `verbose`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Convert verbosity to a tracing level
    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Where log lines end up
enum Sink {
    Stderr,
    File(File),
    Discard,
}

impl Sink {
    /// A requested file that cannot be opened discards output rather than
    /// falling back to stderr, which the TUI draws on.
    fn for_path(log_file: Option<&Path>) -> Self {
        let Some(path) = log_file else {
            return Self::Stderr;
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::File(file),
            Err(_) => Self::Discard,
        }
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `verbosity`. When `log_file` is given,
/// output is appended to that file without ANSI colours, or dropped if the
/// file cannot be opened. Calling this more than once is harmless; later
/// calls are ignored.
pub fn init_logging(verbosity: Verbosity, log_file: Option<&Path>) {
    let default_filter = format!("streamkeep={}", verbosity.to_level());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);

    let _ = match Sink::for_path(log_file) {
        Sink::Stderr => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        Sink::File(file) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        Sink::Discard => registry
            .with(fmt::layer().with_ansi(false).with_writer(std::io::sink))
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.to_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
    }

    #[test]
    fn test_init_logging_to_file_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("streamkeep.log");
        init_logging(Verbosity::Verbose, Some(&path));
        init_logging(Verbosity::Normal, None);
    }

    #[test]
    fn test_unopenable_log_file_discards() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("streamkeep.log");
        assert!(matches!(Sink::for_path(Some(&path)), Sink::Discard));
        assert!(matches!(Sink::for_path(None), Sink::Stderr));

        let path = temp_dir.path().join("streamkeep.log");
        assert!(matches!(Sink::for_path(Some(&path)), Sink::File(_)));
    }
}
