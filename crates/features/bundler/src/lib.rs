//! # Bundler
//!
//! Typed, immutable configuration for the external bundler that builds the
//! 3D front-end: module resolution, plugin order, manual chunks, the worker
//! build target and dev-server behaviour. Nothing here runs the bundler; the
//! record is validated and serialized to the JSON document it reads.
//!
//! ```rust
//! use suite_bundler::{BundlerConfig, ModuleFormat};
//!
//! let config = BundlerConfig::preset();
//! config.validate().unwrap();
//! assert_eq!(config.worker.format, ModuleFormat::Es);
//! assert_eq!(config.chunk_of("@react-three/drei"), Some("r3f"));
//! ```

mod config;
mod error;
mod preset;
mod validate;

pub use crate::config::{
    BuildConfig, BuildOutput, BundlerConfig, DevServerConfig, ModuleFormat, OptimizeDeps, Plugin,
    ResolveConfig, RollupOptions, WatchConfig, WorkerConfig, WorkerOutput,
};
pub use crate::error::{BundlerError, BundlerErrorExt};
pub use crate::preset::BASE_PATH;
