use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

use crate::config::default::{IPV6_DEFAULTS, LOCAL_ADDR, LOOPBACK_V4_ADDR, LOOPBACK_V4_HOSTNAMES};
use crate::config::HostsConfig;
use crate::error::Result;

/// Render a configuration as hosts file text.
///
/// Addresses are ordered as plain strings, so `10.0.0.2` sorts before
/// `2.3.4.5` and IPv4/IPv6 entries interleave. Hostnames are sorted within
/// an address. With `one_line_per_address` every address gets a single line
/// listing all of its hostnames.
pub fn render_hosts(config: &HostsConfig, one_line_per_address: bool) -> String {
    let mut output = String::new();
    for (address, hostnames) in host_lines(config) {
        if hostnames.is_empty() {
            continue;
        }
        if one_line_per_address {
            let names: Vec<&str> = hostnames.into_iter().collect();
            output.push_str(&format!("{} {}\n", address, names.join(" ")));
        } else {
            for hostname in hostnames {
                output.push_str(&format!("{} {}\n", address, hostname));
            }
        }
    }
    output
}

/// Render a configuration and write it to `path`.
pub fn write_hosts_file(path: &Path, config: &HostsConfig, one_line_per_address: bool) -> Result<()> {
    let text = render_hosts(config, one_line_per_address);
    crate::fs::save_text(path, &text)?;
    debug!("Wrote hosts file {}", path.display());
    Ok(())
}

fn host_lines(config: &HostsConfig) -> BTreeMap<&str, BTreeSet<&str>> {
    let mut lines: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    lines.insert(LOOPBACK_V4_ADDR, LOOPBACK_V4_HOSTNAMES.into_iter().collect());
    lines.insert(LOCAL_ADDR, config.local_hostnames.iter().map(String::as_str).collect());

    if config.ipv6_defaults {
        for (address, hostnames) in IPV6_DEFAULTS {
            lines.entry(address).or_default().extend(hostnames.iter().copied());
        }
    }

    for (hostname, host) in &config.hosts {
        if let Some(address) = config.resolve(host).address() {
            lines.entry(address).or_default().insert(hostname.as_str());
        }
    }
    lines
}
