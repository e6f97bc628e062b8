//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and provides config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use suite_kernel::config::load_config;
//! use suite_kernel::domain::config::SuiteConfig;
//!
//! let cfg: SuiteConfig = load_config("suite.toml", false).unwrap_or_default();
//! assert!(!cfg.pages.remote.is_empty());
//! ```
pub mod config;

pub use suite_domain as domain;
