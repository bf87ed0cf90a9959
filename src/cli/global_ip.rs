use clap::{ArgAction, Subcommand};

/// Global IP subcommands
#[derive(Subcommand, Debug)]
pub enum GlobalIpCommand {
    /// Add a global IP to the configuration
    #[command(alias = "a")]
    Add {
        name: String,
        /// IP address, or a hostname to resolve
        address: String,
        /// Overwrite existing
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },

    /// Remove a global IP from the configuration
    #[command(alias = "r")]
    Remove { name: String },

    /// List global IPs in the configuration
    #[command(alias = "l")]
    List,
}
