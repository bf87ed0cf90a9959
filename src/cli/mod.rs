pub mod global_ip;
pub mod group;
pub mod host;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, value_parser};
use tracing::level_filters::LevelFilter;

use crate::config::default::{DEFAULT_HOSTS_FILE, DEFAULT_RESOLVE_TIMEOUT_MS};
use global_ip::GlobalIpCommand;
use group::GroupCommand;
use host::HostCommand;

/// hostbuilder - Build your hosts file from named address options
#[derive(Parser, Debug)]
#[command(author, version, about = "hostbuilder - Build your hosts file from named address options\nhostbuilder build -c hostsConfig.json -o hosts && sudo cp hosts /etc/hosts", long_about = None)]
pub struct Cli {
    /// The path to your config file
    #[arg(short, long, global = true, env = "HOST_BUILDER_CONFIG_FILE", value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub config: Option<PathBuf>,

    /// Global log level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log to file (in addition to stderr)
    #[arg(long, global = true, action = ArgAction::SetTrue, default_value_t = false)]
    pub log_file: bool,

    /// Log file path (default: ./hostbuilder.log)
    #[arg(long, global = true, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub log_file_path: Option<PathBuf>,

    /// Suppress non-error logs
    #[arg(long, global = true, action = ArgAction::SetTrue, default_value_t = false)]
    pub quiet: bool,

    /// DNS lookup timeout in ms for addresses given as hostnames
    #[arg(long, global = true, default_value_t = DEFAULT_RESOLVE_TIMEOUT_MS)]
    pub resolve_timeout_ms: u64,

    /// Subcommands
    #[command(subcommand)]
    pub command: Command,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a config file from an existing hosts file
    #[command(alias = "c")]
    CreateConfig(CreateConfigArgs),

    /// Build your hosts file
    #[command(alias = "b")]
    Build(BuildArgs),

    /// Manage global IPs shared between hosts
    #[command(subcommand)]
    #[command(alias = "gl")]
    GlobalIp(GlobalIpCommand),

    /// Modify hosts
    #[command(subcommand)]
    #[command(alias = "ho")]
    Host(HostCommand),

    /// Modify groups
    #[command(subcommand)]
    #[command(alias = "gr")]
    Group(GroupCommand),

    /// Work with an external inventory of name to address
    #[command(subcommand)]
    #[command(alias = "i")]
    Inventory(InventoryCommand),

    /// Show the whole configuration as a tree
    Show,
}

/// Config creation arguments
#[derive(Args, Debug)]
pub struct CreateConfigArgs {
    /// The path to your hosts file
    #[arg(long, visible_alias = "hosts", value_name = "FILE", default_value = DEFAULT_HOSTS_FILE, value_parser = value_parser!(PathBuf))]
    pub hosts_file: PathBuf,

    /// Seed the config from a JSON inventory of name to address instead of a hosts file
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub inventory: Option<PathBuf>,
}

/// Build arguments
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// The path to write your hosts file (default: stdout)
    #[arg(short, long, env = "HOST_BUILDER_OUTPUT_FILE", value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Put all hosts for an IP on the same line
    #[arg(long, visible_alias = "oneLinePerIP", action = ArgAction::SetTrue)]
    pub one_line_per_ip: bool,
}

/// Inventory subcommands
#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Add every inventory entry as a global IP, replacing existing names
    #[command(alias = "im")]
    Import(InventoryArgs),
}

/// Inventory import arguments
#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// JSON file with an object of name to address (or DNS name)
    #[arg(required = true, value_parser = value_parser!(PathBuf))]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_host_add_with_global_flags() {
        let cli = Cli::try_parse_from([
            "hostbuilder", "host", "add", "foo.bar", "10.0.0.1", "dev", "--force", "-c", "hosts.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("hosts.json")));
        match cli.command {
            Command::Host(HostCommand::Add(args)) => {
                assert_eq!(args.hostname, "foo.bar");
                assert_eq!(args.target, "10.0.0.1");
                assert_eq!(args.option.as_deref(), Some("dev"));
                assert!(args.force);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_aliases() {
        let cli = Cli::try_parse_from(["hostbuilder", "gr", "se", "web", "baz"]).unwrap();
        assert!(matches!(cli.command, Command::Group(GroupCommand::Set { .. })));

        let cli = Cli::try_parse_from(["hostbuilder", "b", "--oneLinePerIP"]).unwrap();
        match cli.command {
            Command::Build(args) => assert!(args.one_line_per_ip),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_inventory_import() {
        let cli = Cli::try_parse_from(["hostbuilder", "i", "import", "instances.json"]).unwrap();
        match cli.command {
            Command::Inventory(InventoryCommand::Import(args)) => {
                assert_eq!(args.file, PathBuf::from("instances.json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["hostbuilder", "show"]).unwrap();
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::WARN);
        let cli = Cli::try_parse_from(["hostbuilder", "show", "--log-level", "debug"]).unwrap();
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::DEBUG);
    }

    #[test]
    fn create_config_defaults_to_system_hosts_file() {
        let cli = Cli::try_parse_from(["hostbuilder", "create-config"]).unwrap();
        match cli.command {
            Command::CreateConfig(args) => {
                assert_eq!(args.hosts_file, PathBuf::from("/etc/hosts"));
                assert!(args.inventory.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
