//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, subprocesses, or heavy logic—just data and constants.

pub mod config;
pub mod constants;
