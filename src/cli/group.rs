use clap::Subcommand;

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    /// Add a hostname to a group
    #[command(alias = "a")]
    Add { group: String, hostname: String },

    /// List available groups
    #[command(alias = "l")]
    List,

    /// List the hostnames in a group
    #[command(alias = "sh")]
    Show { group: String },

    /// Set the hostnames in a group to a global ip
    #[command(alias = "se")]
    Set {
        group: String,
        /// Global IP name or `ignore`
        target: String,
    },
}
