//! Logging setup for the binaries.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! front end installs a subscriber through [`init_logging`].

use std::env;
use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "ONLINE_COLORING_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Reasons the binaries could not set up their `tracing` output.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ONLINE_COLORING_LOG_FORMAT` was set to bytes that are not UTF-8.
    #[error("`{name}` is not valid UTF-8: {source}")]
    InvalidUnicode {
        /// Variable that was read.
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    /// The format switch named neither `human` nor `json`.
    #[error("log format `{provided}` is not supported (use `human` or `json`)")]
    UnsupportedFormat {
        /// Value as given, trimmed and lowercased.
        provided: String,
    },
    /// Another global subscriber was installed first.
    #[error("could not register the tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Output style of the stderr subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
            Err(source) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
/// `ONLINE_COLORING_LOG_FORMAT=json` switches to JSON lines. Only the first
/// call does any work.
///
/// A subscriber installed earlier by someone else is reported on stderr and
/// left in place.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    if let Err(err) = install_subscriber(format) {
        eprintln!("keeping existing log subscriber: {err}");
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
