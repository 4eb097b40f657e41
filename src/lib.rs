//! kintai library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod net;
pub mod scrape;
pub mod ui;
pub mod workflow;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;
use workflow::attendance::PunchMode;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Start => cli::commands::punch::handle(cli, PunchMode::Start),
        Commands::End => cli::commands::punch::handle(cli, PunchMode::End),
        Commands::List => cli::commands::list::handle(cli),
        Commands::Show { day } => cli::commands::show::handle(cli, day),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
