use anyhow::{Context, Result};
use suite_kernel::config::load_config;
use suite_kernel::domain::config::SuiteConfig;

/// Optional settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "suite.toml";

/// Loads toolkit settings from `suite.toml` (if present) and `SUITE__*` overrides.
///
/// # Errors
/// Returns an error if the file or an override cannot be parsed.
pub fn load_settings() -> Result<SuiteConfig> {
    load_config(SETTINGS_FILE, false).with_context(|| format!("Failed to load {SETTINGS_FILE}"))
}
