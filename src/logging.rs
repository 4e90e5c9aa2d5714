//! Structured logging setup for the generator binary.
//!
//! Events go to stderr so that `--dry-run` output on stdout stays clean.
//!
//! - `ROUTEWIRE_LOG` - an `EnvFilter` directive string, e.g. `debug` or
//!   `routewire::generator=trace` (default `info`)
//! - `ROUTEWIRE_LOG_FORMAT` - `pretty` or `json` (default `pretty`)

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_FILTER_ENV: &str = "ROUTEWIRE_LOG";
pub const LOG_FORMAT_ENV: &str = "ROUTEWIRE_LOG_FORMAT";

/// Log format: pretty for terminals, JSON for CI log collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives, same syntax as `RUST_LOG`
    pub filter: String,
    pub format: LogFormat,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            filter: env::var(LOG_FILTER_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: env::var(LOG_FORMAT_ENV)
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            include_location: defaults.include_location,
        }
    }

    /// Verbose variant used by `--verbose`.
    pub fn verbose(mut self) -> Self {
        self.filter = "debug".to_string();
        self.include_location = true;
        self
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))?;

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("invalid"), LogFormat::Pretty); // Default
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LogConfig::default().verbose();
        assert_eq!(config.filter, "debug");
        assert!(config.include_location);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LogConfig {
            filter: "routewire=notalevel".to_string(),
            ..LogConfig::default()
        };
        assert!(init_logging(&config).is_err());
    }
}
