//! daybook-export library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;
use export::ExtractLogic;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    ExtractLogic::extract(&cli.input, &cli.output, cli.raw)
}
