use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::{HostsConfig, Replaced};
use crate::error::Error;

/// Settings shared by every command runner.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config_path: PathBuf,
    pub resolve_timeout: Duration,
}

impl CommandContext {
    /// Take the config path and resolver settings from the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().ok_or(Error::MissingConfigPath)?;
        Ok(Self {
            config_path,
            resolve_timeout: Duration::from_millis(cli.resolve_timeout_ms),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file.
    pub fn load(&self) -> Result<HostsConfig> {
        HostsConfig::load(&self.config_path)
            .with_context(|| format!("load config {}", self.config_path.display()))
    }

    /// Save the config file.
    pub fn save(&self, config: &HostsConfig) -> Result<()> {
        config
            .save(&self.config_path)
            .with_context(|| format!("save config {}", self.config_path.display()))
    }
}

/// Warn about a value replaced by a forced insert.
pub fn warn_replaced(replaced: Option<Replaced>) {
    if let Some(r) = replaced {
        tracing::warn!("Overwriting {} ({} => {})", r.name, r.old, r.new);
    }
}
