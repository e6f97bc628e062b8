//! # Logger
//!
//! A centralized logging utility for the tooling.
//! It configures a single console layer with environment-based filtering.
//!
//! * Console output always goes to **stderr**; stdout is reserved for the
//!   reports the tools print.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"suite_pages=debug,warn"`). A set `RUST_LOG` takes precedence.
//! * [`LoggerBuilder::json`] switches to JSON lines for machine consumption.
//!
//! ## Example
//!
//! ```rust
//! # use suite_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-tool")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::str::FromStr;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    level: LevelFilter,
    json: bool,
    ansi: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LevelFilter::WARN, json: false, ansi: true, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `suite_pages=debug,warn`).
    ///
    /// A set `RUST_LOG` still wins; this is a programmatic default.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Emits JSON lines instead of the compact human format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Toggles ANSI colors in the compact format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_name(&self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let console = if self.config.json {
            layer().json().with_writer(std::io::stderr).boxed()
        } else {
            layer().compact().with_writer(std::io::stderr).with_ansi(self.config.ansi).boxed()
        };

        tracing_subscriber::registry().with(env_filter).with(console).try_init()?;

        tracing::debug!(logger = %self.name.0, "Logger initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Keep the handle alive for the lifetime of the process."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use suite_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-tool")
    ///     .level(LevelFilter::INFO)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Name the logger was initialized with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_name(name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    Ok(())
}

/// Parses a plain level name such as `warn` or `DEBUG`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything that is not a
/// level, so a typo is reported instead of being read as a target directive.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggerError::InvalidConfiguration {
        message: format!(
            "Invalid log level '{level}': expected one of off, error, warn, info, debug, trace"
        )
        .into(),
        context: Some("log.level".into()),
    })
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());

    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    match config.env_filter.as_ref() {
        Some(filter) if !from_env => {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
        _ => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-tool").env_filter("suite=debug");
        assert_eq!(logger_builder.config.level, LevelFilter::WARN);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("suite=debug"));
        assert!(!logger_builder.config.json);
        assert!(logger_builder.config.ansi);
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let logger_builder = Logger::builder()
            .name("test-tool")
            .json(true)
            .ansi(false)
            .level(LevelFilter::DEBUG);

        assert!(logger_builder.config.json);
        assert!(!logger_builder.config.ansi);
        assert_eq!(logger_builder.config.level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn test_empty_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_level_names_are_parsed() {
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" off ").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        for level in ["verbose", "warning", "suite=debug"] {
            let err = parse_level(level).expect_err(level);
            assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{level}");
            assert!(err.to_string().contains("Invalid log level"), "got: {err}");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_filter_is_rejected() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        let config = LoggerConfig {
            env_filter: Some("suite=notalevel".to_owned()),
            ..LoggerConfig::default()
        };
        let err = build_env_filter(&config).expect_err("filter must be rejected");
        assert!(err.to_string().contains("Invalid env filter"), "got: {err}");
    }
}
