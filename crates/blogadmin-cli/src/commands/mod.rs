//! Subcommand implementations.

pub mod login;
mod logout;
pub mod open;
pub mod status;
mod whoami;

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::context;

pub async fn handle(cli: Cli) -> Result<ExitCode> {
    let store = context::open_store(&cli)?;

    match cli.command {
        Commands::Login(args) => login::run(&store, args).await,
        Commands::Logout => logout::run(&store),
        Commands::Whoami => whoami::run(&store).await,
        Commands::Status(args) => status::run(&store, args),
        Commands::Open(args) => open::run(&store, args),
    }
}
