use std::collections::BTreeMap;
use tracing::debug;

use super::default::{DEFAULT_OPTION_NAME, LOCAL_ADDR, LOOPBACK_V4_ADDR};
use super::{Host, HostsConfig};

/// Build a configuration from hostnames and the addresses they were seen with.
///
/// The first address of a hostname becomes option `default` and is selected,
/// later ones become `default2`, `default3`, ... by current option count.
/// Hostnames on `127.0.1.1` go to `local_hostnames`, and `127.0.0.1` entries
/// of `*localhost*` names are dropped since rendering always emits them.
pub fn build_config(hosts: &BTreeMap<String, Vec<String>>) -> HostsConfig {
    let mut config = HostsConfig::default();
    for (hostname, addresses) in hosts {
        for address in addresses {
            add_address(&mut config, hostname, address);
        }
    }
    debug!(
        "Built config with {} hosts and {} local hostnames",
        config.hosts.len(),
        config.local_hostnames.len()
    );
    config
}

/// Build a configuration from a name to address inventory, one address per name.
pub fn build_config_from_inventory(inventory: &BTreeMap<String, String>) -> HostsConfig {
    let hosts: BTreeMap<String, Vec<String>> = inventory
        .iter()
        .map(|(name, address)| (name.clone(), vec![address.clone()]))
        .collect();
    build_config(&hosts)
}

fn add_address(config: &mut HostsConfig, hostname: &str, address: &str) {
    if address == LOCAL_ADDR {
        config.local_hostnames.push(hostname.to_string());
        return;
    }
    if address == LOOPBACK_V4_ADDR && hostname.contains("localhost") {
        return;
    }
    match config.hosts.get_mut(hostname) {
        Some(host) => {
            let name = format!("{}{}", DEFAULT_OPTION_NAME, host.options.len() + 1);
            host.options.insert(name, address.to_string());
        }
        None => {
            config
                .hosts
                .insert(hostname.to_string(), Host::with_option(DEFAULT_OPTION_NAME, address));
        }
    }
}
