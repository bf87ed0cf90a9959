use clap::{ArgAction, Args, Subcommand};

/// Host subcommands
#[derive(Subcommand, Debug)]
pub enum HostCommand {
    /// Add an IP to a hostname, or bind a new hostname to a global IP
    #[command(alias = "a")]
    Add(HostAddArgs),

    /// Remove an IP from a hostname
    #[command(alias = "r")]
    Remove {
        hostname: String,
        /// Name of the option to remove
        option: String,
    },

    /// List the available hostnames
    #[command(alias = "l")]
    List,

    /// Describe the IPs on a hostname
    #[command(alias = "sh")]
    Show { hostname: String },

    /// Set a hostname to a specific ip
    #[command(alias = "se")]
    Set {
        hostname: String,
        /// Option name, global IP name or `ignore`
        target: String,
    },
}

/// `host add` arguments.
///
/// With an option name, `target` is an address (or a hostname to resolve)
/// stored under that option. Without one, `target` names a global IP.
#[derive(Args, Debug)]
pub struct HostAddArgs {
    pub hostname: String,

    /// Address, or global IP name when no option name is given
    pub target: String,

    /// Name of the option to store the address under
    pub option: Option<String>,

    /// Overwrite existing
    #[arg(long, action = ArgAction::SetTrue)]
    pub force: bool,
}
