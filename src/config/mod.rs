pub mod builder;
pub mod codec;
pub mod default;
mod global_ip;
mod group;
mod host;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use default::IGNORE;

/// The hosts configuration: per-host address options, shared global IPs and groups.
///
/// Maps are ordered so that the persisted form is stable across saves.
/// Absent collections in the persisted form decode to empty ones (see [`codec`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "codec::RawConfig")]
pub struct HostsConfig {
    /// Hostnames rendered under `127.0.1.1`
    #[serde(rename = "localHostnames", skip_serializing_if = "Vec::is_empty")]
    pub local_hostnames: Vec<String>,
    /// Render the well-known IPv6 entries
    #[serde(rename = "ipV6Defaults", skip_serializing_if = "is_false")]
    pub ipv6_defaults: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hosts: BTreeMap<String, Host>,
    /// Named addresses that any host can point its `current` at
    #[serde(rename = "globalIPs", skip_serializing_if = "BTreeMap::is_empty")]
    pub global_ips: BTreeMap<String, String>,
    /// Group name to member hostnames, in insertion order
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, Vec<String>>,
}

/// Resolution state of a single hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "codec::RawHost")]
pub struct Host {
    /// Selected option name, global IP name, or `ignore`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl Host {
    /// Create a host with a single option which is also the current one.
    pub fn with_option(name: &str, address: &str) -> Self {
        let mut options = BTreeMap::new();
        options.insert(name.to_string(), address.to_string());
        Self {
            current: name.to_string(),
            options,
        }
    }

    /// Create a host with no options pointing at a global IP.
    pub fn bound_to(global_ip_name: &str) -> Self {
        Self {
            current: global_ip_name.to_string(),
            options: BTreeMap::new(),
        }
    }
}

/// What a host's `current` selector points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// One of the host's own options
    Option { name: &'a str, address: &'a str },
    /// A shared global IP
    Global { name: &'a str, address: &'a str },
    /// The `ignore` sentinel
    Ignored,
    /// A name that exists in neither the options nor the global IPs
    Unresolved(&'a str),
}

impl<'a> Resolution<'a> {
    /// The address to render, if any.
    pub fn address(&self) -> Option<&'a str> {
        match *self {
            Resolution::Option { address, .. } | Resolution::Global { address, .. } => Some(address),
            Resolution::Ignored | Resolution::Unresolved(_) => None,
        }
    }
}

/// Value overwritten by a forced insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub name: String,
    pub old: String,
    pub new: String,
}

impl HostsConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<HostsConfig> {
        let bytes = crate::fs::read_bytes(path)?;
        codec::decode(&bytes)
    }

    /// Save the configuration to a JSON file, replacing its contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = codec::encode(self)?;
        crate::fs::save_bytes(path, &bytes)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Look up what the host's `current` selector points at.
    ///
    /// The host's own options take precedence over global IPs of the same name.
    pub fn resolve<'a>(&'a self, host: &'a Host) -> Resolution<'a> {
        let name = host.current.as_str();
        if let Some(address) = host.options.get(name) {
            return Resolution::Option { name, address };
        }
        if let Some(address) = self.global_ips.get(name) {
            return Resolution::Global { name, address };
        }
        if name == IGNORE {
            Resolution::Ignored
        } else {
            Resolution::Unresolved(name)
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
