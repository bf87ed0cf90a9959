use anyhow::Result;

use crate::cli::group::GroupCommand;
use crate::cmd::common::CommandContext;
use crate::output::group::{print_groups, print_members};

/// Run a `group` subcommand
pub fn run(ctx: &CommandContext, command: GroupCommand) -> Result<()> {
    match command {
        GroupCommand::Add { group, hostname } => {
            let mut config = ctx.load()?;
            config.add_to_group(&group, &hostname)?;
            ctx.save(&config)
        }
        GroupCommand::List => {
            let config = ctx.load()?;
            print_groups(&mut std::io::stdout().lock(), &config)?;
            Ok(())
        }
        GroupCommand::Show { group } => {
            let config = ctx.load()?;
            let members = config.group_members(&group)?;
            print_members(&mut std::io::stdout().lock(), &members)?;
            Ok(())
        }
        GroupCommand::Set { group, target } => {
            let mut config = ctx.load()?;
            let count = config.set_group(&group, &target)?;
            ctx.save(&config)?;
            tracing::info!("Set {} hosts in {} to {}", count, group, target);
            Ok(())
        }
    }
}
