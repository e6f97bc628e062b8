#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{bundler, pages};
use crate::models::args::{AppCommands, BundlerAction, Cli};
use crate::services::utils::load_settings;

use anyhow::Result;
use clap::Parser;
use suite_logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings()?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&settings.log.level)?)
        .json(settings.log.json)
        .init()?;

    match cli.command {
        AppCommands::Pages {} => pages::check_pages(&settings.pages)?,
        AppCommands::Bundler { action } => match action {
            BundlerAction::Show { compact } => bundler::show_config(compact)?,
            BundlerAction::Emit { out } => {
                let out = out.unwrap_or_else(|| settings.bundler.output.clone());
                bundler::emit_config(&out)?;
            },
            BundlerAction::Check { file } => bundler::check_config(file.as_deref())?,
        },
    }

    Ok(())
}
