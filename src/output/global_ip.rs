use std::io::{self, Write};

use crate::config::HostsConfig;

/// Print global IPs as an aligned name/address table, sorted by name.
pub fn print_global_ips<W: Write>(w: &mut W, config: &HostsConfig) -> io::Result<()> {
    let width = config.global_ips.keys().map(|name| name.len()).max().unwrap_or(0) + 1;
    for (name, address) in &config.global_ips {
        writeln!(w, "{:<width$}{}", name, address, width = width)?;
    }
    Ok(())
}
