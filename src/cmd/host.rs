use anyhow::Result;

use crate::cli::host::{HostAddArgs, HostCommand};
use crate::cmd::common::{warn_replaced, CommandContext};
use crate::output;

/// Run a `host` subcommand
pub async fn run(ctx: &CommandContext, command: HostCommand) -> Result<()> {
    match command {
        HostCommand::Add(args) => add(ctx, &args).await,
        HostCommand::Remove { hostname, option } => {
            let mut config = ctx.load()?;
            let address = config.remove_host_option(&hostname, &option)?;
            ctx.save(&config)?;
            tracing::info!("Removed {} ({}) from {}", option, address, hostname);
            Ok(())
        }
        HostCommand::List => {
            let config = ctx.load()?;
            output::print_names(&mut std::io::stdout().lock(), config.hosts.keys().map(String::as_str))?;
            Ok(())
        }
        HostCommand::Show { hostname } => {
            let config = ctx.load()?;
            let host = config.host(&hostname)?;
            output::host::print_host(&mut std::io::stdout().lock(), &config, host)?;
            Ok(())
        }
        HostCommand::Set { hostname, target } => {
            let mut config = ctx.load()?;
            config.set_host_current(&hostname, &target)?;
            ctx.save(&config)
        }
    }
}

async fn add(ctx: &CommandContext, args: &HostAddArgs) -> Result<()> {
    let mut config = ctx.load()?;
    match &args.option {
        Some(option) => {
            let address = crate::dns::resolve_address(&args.target, ctx.resolve_timeout).await?;
            let replaced = config.add_host_option(&args.hostname, &address, option, args.force)?;
            warn_replaced(replaced);
        }
        None => config.add_global_ip_host(&args.hostname, &args.target)?,
    }
    ctx.save(&config)
}
