//! Typed mirror of the bundler's option tree.
//!
//! Field names serialize to the camelCase keys the bundler reads
//! (`optimizeDeps`, `build.rollupOptions.output.manualChunks`, ...).

use crate::error::{BundlerError, BundlerErrorExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Root of the configuration handed to the external bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    /// URL prefix the built assets are served under.
    pub base: String,
    /// Applied in order; interop must run before the UI framework transform.
    pub plugins: Vec<Plugin>,
    pub worker: WorkerConfig,
    pub resolve: ResolveConfig,
    pub optimize_deps: OptimizeDeps,
    pub build: BuildConfig,
    /// Compile-time substitutions, identifier to JavaScript expression.
    pub define: BTreeMap<String, String>,
    pub server: DevServerConfig,
}

/// Plugins the configuration knows how to declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Plugin {
    /// Translates `CommonJS` dependencies into ES modules.
    #[serde(rename = "commonjs")]
    CommonJs { include: Vec<String> },
    /// UI framework transform (JSX, fast refresh).
    #[serde(rename = "react")]
    React,
}

impl Plugin {
    #[must_use]
    pub const fn is_framework(&self) -> bool {
        matches!(self, Self::React)
    }

    #[must_use]
    pub const fn is_interop(&self) -> bool {
        matches!(self, Self::CommonJs { .. })
    }
}

/// Output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    Es,
    Cjs,
    Iife,
    Umd,
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Es => "es",
            Self::Cjs => "cjs",
            Self::Iife => "iife",
            Self::Umd => "umd",
        };
        f.write_str(name)
    }
}

/// Build options scoped to code compiled for a background worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfig {
    pub format: ModuleFormat,
    pub plugins: Vec<Plugin>,
    pub rollup_options: RollupOptions<WorkerOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupOptions<O> {
    pub output: O,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerOutput {
    /// Workers cannot load split chunks, so dynamic imports are inlined.
    pub inline_dynamic_imports: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConfig {
    /// Packages resolved to a single shared copy across the graph.
    pub dedupe: Vec<String>,
    pub alias: BTreeMap<String, String>,
}

/// Dependency pre-bundling hints for the dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeDeps {
    pub include: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub rollup_options: RollupOptions<BuildOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutput {
    pub format: ModuleFormat,
    /// Chunk name to the packages grouped into it.
    pub manual_chunks: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    pub watch: WatchConfig,
    /// Ignore the dependency cache and start cold on every launch.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchConfig {
    pub use_polling: bool,
    /// Poll interval in milliseconds.
    pub interval: u32,
}

impl BundlerConfig {
    /// Main bundle output format.
    #[must_use]
    pub const fn output_format(&self) -> ModuleFormat {
        self.build.rollup_options.output.format
    }

    #[must_use]
    pub const fn manual_chunks(&self) -> &BTreeMap<String, Vec<String>> {
        &self.build.rollup_options.output.manual_chunks
    }

    /// Name of the manual chunk `package` is grouped into, if any.
    #[must_use]
    pub fn chunk_of(&self, package: &str) -> Option<&str> {
        self.manual_chunks()
            .iter()
            .find(|(_, packages)| packages.iter().any(|p| p == package))
            .map(|(name, _)| name.as_str())
    }

    /// Compact JSON document for the bundler.
    ///
    /// # Errors
    /// Returns [`BundlerError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, BundlerError> {
        serde_json::to_string(self).context("Failed to encode bundler config")
    }

    /// Pretty-printed JSON document, as written by `emit`.
    ///
    /// # Errors
    /// Returns [`BundlerError::Serialization`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, BundlerError> {
        serde_json::to_string_pretty(self).context("Failed to encode bundler config")
    }

    /// Reads a previously emitted document back.
    ///
    /// # Errors
    /// Returns [`BundlerError::Serialization`] if `raw` is not a valid config document.
    pub fn from_json(raw: &str) -> Result<Self, BundlerError> {
        serde_json::from_str(raw).context("Failed to decode bundler config")
    }
}
