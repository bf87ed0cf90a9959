pub mod cli;
pub mod cmd;
pub mod config;
pub mod dns;
pub mod error;
pub mod fs;
pub mod hosts;
pub mod inventory;
pub mod log;
pub mod output;
pub mod time;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init_logger(&cli)?;
    tracing::debug!("{:?}", cli.command);
    if let Err(e) = cmd::run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
