pub mod common;
pub mod config;
pub mod global_ip;
pub mod group;
pub mod host;
pub mod inventory;

use anyhow::Result;

use crate::cli::{Cli, Command, InventoryCommand};
use common::CommandContext;

/// Run the parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(&cli)?;
    match cli.command {
        Command::CreateConfig(args) => config::create_config(&ctx, &args).await,
        Command::Build(args) => config::build(&ctx, &args),
        Command::GlobalIp(command) => global_ip::run(&ctx, command).await,
        Command::Host(command) => host::run(&ctx, command).await,
        Command::Group(command) => group::run(&ctx, command),
        Command::Inventory(InventoryCommand::Import(args)) => inventory::import(&ctx, &args).await,
        Command::Show => config::show(&ctx),
    }
}
