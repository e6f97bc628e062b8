use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "SUITE";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds a human-readable context to config loading failures.
pub trait ConfigErrorExt<T> {
    /// Attaches `context` to the error, if any.
    ///
    /// # Errors
    /// Returns the original error wrapped as [`ConfigError`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **Base File**: settings from `path` (format detected from the extension, e.g. `suite.toml`).
///    When `required` is `false`, a missing file is silently skipped.
/// 3. **Environment Overrides**: variables prefixed with `SUITE__`.
///    Nested structures are accessed using double underscores (e.g., `SUITE__PAGES__SITE_PATH`
///    maps to `pages.site_path`).
///
/// # Errors
/// This function will return an error if:
/// * `required` is set and the file cannot be found.
/// * The content of the file or the environment does not match the structure of `T`.
///
/// # Example
/// ```rust,no_run
/// use suite_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config("config/local.toml", true).unwrap_or_default();
/// ```
pub fn load_config<T>(path: impl AsRef<Path>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let builder = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    debug!(path = %path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
