use anyhow::{Context, Result};

use crate::cli::InventoryArgs;
use crate::cmd::common::CommandContext;
use crate::inventory::{resolve_entries, Inventory, JsonInventory};

/// Import inventory entries as global IPs
pub async fn import(ctx: &CommandContext, args: &InventoryArgs) -> Result<()> {
    let entries = JsonInventory::new(&args.file)
        .read_all()
        .with_context(|| format!("read inventory {}", args.file.display()))?;
    let entries = resolve_entries(entries, ctx.resolve_timeout).await?;
    let mut config = ctx.load()?;
    let count = config.merge_global_ips(entries);
    ctx.save(&config)?;
    tracing::info!("Imported {} global IPs", count);
    Ok(())
}
