use anyhow::Result;
use std::io::Write;

use crate::cli::{BuildArgs, CreateConfigArgs};
use crate::cmd::common::CommandContext;
use crate::config::builder::{build_config, build_config_from_inventory};
use crate::hosts;
use crate::inventory::{resolve_entries, Inventory, JsonInventory};

/// Create a config file from a hosts file or an inventory
///
/// Inventory addresses given as DNS names are resolved first. Nothing is
/// written if any of them fails to resolve.
pub async fn create_config(ctx: &CommandContext, args: &CreateConfigArgs) -> Result<()> {
    let config = match &args.inventory {
        Some(path) => {
            let entries = JsonInventory::new(path).read_all()?;
            let entries = resolve_entries(entries, ctx.resolve_timeout).await?;
            build_config_from_inventory(&entries)
        }
        None => {
            let entries = hosts::read_hosts_file(&args.hosts_file)?;
            build_config(&entries)
        }
    };
    ctx.save(&config)?;
    tracing::info!(
        "Created {} with {} hosts",
        ctx.config_path().display(),
        config.hosts.len()
    );
    Ok(())
}

/// Render the hosts file to the output path, or stdout
pub fn build(ctx: &CommandContext, args: &BuildArgs) -> Result<()> {
    let config = ctx.load()?;
    match &args.output {
        Some(path) => {
            hosts::write_hosts_file(path, &config, args.one_line_per_ip)?;
            tracing::info!("Hosts file written to {}", path.display());
        }
        None => {
            let text = hosts::render_hosts(&config, args.one_line_per_ip);
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print the configuration overview
pub fn show(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load()?;
    crate::output::tree::print_config_tree(&mut std::io::stdout().lock(), &config)?;
    Ok(())
}
