use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::QuizConfig;

const DEFAULT_FILTER: &str = "info";

/// Where a run's log events end up.
#[derive(Debug, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// The terminal UI owns stdout and stderr.
    Disabled,
}

impl<'a> LogTarget<'a> {
    pub fn for_config(config: &'a QuizConfig) -> Self {
        match (&config.log_file, config.dump) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

/// Installs the global tracing subscriber for a run.
///
/// Fails if the log file cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &QuizConfig) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = match LogTarget::for_config(config) {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
        LogTarget::Disabled => Ok(()),
    };

    installed.map_err(io::Error::other)
}
