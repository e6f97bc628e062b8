use crate::constants::{DEFAULT_BUNDLER_OUTPUT, DEFAULT_REMOTE, DEFAULT_SITE_PATH};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level settings for the developer tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub pages: PagesConfig,
    pub bundler: BundlerSettings,
    pub log: LogConfig,
}

/// Settings for the static-site hosting checklist.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Name of the remote whose URL is inspected.
    pub remote: String,
    /// Sub-path of the deployed application below the repository site.
    pub site_path: String,
    /// Version-control executable looked up on `PATH`.
    pub git_binary: String,
}

/// Settings for emitting the bundler configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundlerSettings {
    pub output: PathBuf,
}

/// Console logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (`off`, `error`, `warn`, `info`, `debug` or `trace`), overridden by `RUST_LOG`.
    pub level: String,
    pub json: bool,
}

// --- Default ---

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_owned(),
            site_path: DEFAULT_SITE_PATH.to_owned(),
            git_binary: "git".to_owned(),
        }
    }
}

impl Default for BundlerSettings {
    fn default() -> Self {
        Self { output: PathBuf::from(DEFAULT_BUNDLER_OUTPUT) }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false }
    }
}
