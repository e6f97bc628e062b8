//! Well-known names shared by the tooling crates.

/// Host segment a recognised remote URL must contain.
pub const GITHUB_HOST: &str = "github.com";
/// Domain the static site is served from (`<owner>.github.io`).
pub const PAGES_DOMAIN: &str = "github.io";

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_SITE_PATH: &str = "3d-printer-suite";
pub const DEFAULT_BUNDLER_OUTPUT: &str = "vite.config.json";

// Front-end packages referenced by the bundler configuration.
pub const THREE: &str = "three";
pub const REACT: &str = "react";
pub const REACT_DOM: &str = "react-dom";
pub const ZUSTAND: &str = "zustand";
pub const R3F_FIBER: &str = "@react-three/fiber";
pub const R3F_DREI: &str = "@react-three/drei";
