//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the toolkit.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the 3D Printer Suite workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available toolkit subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the GitHub Pages checklist for the `origin` remote
    Pages {},
    /// Inspect or export the bundler configuration
    Bundler {
        #[command(subcommand)]
        action: BundlerAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum BundlerAction {
    /// Print the configuration as the JSON document the bundler reads
    Show {
        /// Single-line output instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Write the configuration document to a file
    Emit {
        /// Destination (defaults to `bundler.output` from suite.toml)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate the built-in configuration or a previously emitted document
    Check {
        /// Emitted JSON document to validate instead of the built-in one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
