use anyhow::Result;

use crate::cli::global_ip::GlobalIpCommand;
use crate::cmd::common::{warn_replaced, CommandContext};

/// Run a `global-ip` subcommand
pub async fn run(ctx: &CommandContext, command: GlobalIpCommand) -> Result<()> {
    match command {
        GlobalIpCommand::Add { name, address, force } => {
            let address = crate::dns::resolve_address(&address, ctx.resolve_timeout).await?;
            let mut config = ctx.load()?;
            warn_replaced(config.add_global_ip(&name, &address, force)?);
            ctx.save(&config)
        }
        GlobalIpCommand::Remove { name } => {
            let mut config = ctx.load()?;
            config.remove_global_ip(&name)?;
            ctx.save(&config)
        }
        GlobalIpCommand::List => {
            let config = ctx.load()?;
            crate::output::global_ip::print_global_ips(&mut std::io::stdout().lock(), &config)?;
            Ok(())
        }
    }
}
