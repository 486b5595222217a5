//! # Logging
//!
//! tracing subscriber setup. Logs go to stderr; stdout belongs to the menu.

use crate::config::{LogFormat, LoggingSettings};
use roster_core::RosterError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor the settings file names one.
pub const DEFAULT_FILTER: &str = "roster=info";

/// Default filter with `--verbose`.
pub const VERBOSE_FILTER: &str = "roster=debug,roster_core=debug";

/// Pick the filter directive: `--verbose` beats the settings file.
#[must_use]
pub fn default_directive(settings: &LoggingSettings, verbose: bool) -> String {
    if verbose {
        VERBOSE_FILTER.to_string()
    } else {
        settings
            .filter
            .clone()
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

/// Parse a filter directive, rejecting anything `EnvFilter` cannot read.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, RosterError> {
    EnvFilter::try_new(directive)
        .map_err(|e| RosterError::Config(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install the global subscriber. `RUST_LOG` overrides the default directive.
pub fn init(settings: &LoggingSettings, verbose: bool) -> Result<(), RosterError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&default_directive(settings, verbose))?,
    };

    match settings.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}
