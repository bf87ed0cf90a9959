use tracing::debug;

use super::default::IGNORE;
use super::{Host, HostsConfig, Replaced};
use crate::error::{EntryKind, Error, Result};

impl HostsConfig {
    /// Add a named address option to a hostname.
    ///
    /// An unknown hostname is created with this option selected. An existing
    /// option is only replaced with `force`, in which case the replaced value
    /// is returned.
    pub fn add_host_option(
        &mut self,
        hostname: &str,
        address: &str,
        option: &str,
        force: bool,
    ) -> Result<Option<Replaced>> {
        let host = match self.hosts.get_mut(hostname) {
            Some(host) => host,
            None => {
                self.hosts
                    .insert(hostname.to_string(), Host::with_option(option, address));
                debug!("Added host {} ({} => {})", hostname, option, address);
                return Ok(None);
            }
        };

        let replaced = match host.options.get(option) {
            Some(existing) if !force => {
                return Err(Error::AlreadyExists {
                    kind: EntryKind::Option,
                    name: option.to_string(),
                    existing: existing.clone(),
                    requested: address.to_string(),
                });
            }
            Some(existing) => Some(Replaced {
                name: option.to_string(),
                old: existing.clone(),
                new: address.to_string(),
            }),
            None => None,
        };
        host.options.insert(option.to_string(), address.to_string());
        Ok(replaced)
    }

    /// Add a hostname with no options of its own that points at a global IP.
    pub fn add_global_ip_host(&mut self, hostname: &str, global_ip_name: &str) -> Result<()> {
        if let Some(existing) = self.hosts.get(hostname) {
            return Err(Error::AlreadyExists {
                kind: EntryKind::Host,
                name: hostname.to_string(),
                existing: existing.current.clone(),
                requested: global_ip_name.to_string(),
            });
        }
        self.hosts
            .insert(hostname.to_string(), Host::bound_to(global_ip_name));
        Ok(())
    }

    /// Remove an option from a hostname, returning its address.
    ///
    /// Removing the last option switches the host to `ignore`.
    pub fn remove_host_option(&mut self, hostname: &str, option: &str) -> Result<String> {
        let host = self
            .hosts
            .get_mut(hostname)
            .ok_or_else(|| Error::not_found(EntryKind::Host, hostname))?;
        let address = host
            .options
            .remove(option)
            .ok_or_else(|| Error::not_found(EntryKind::Option, option))?;
        if host.options.is_empty() {
            host.current = IGNORE.to_string();
        }
        Ok(address)
    }

    /// Select an option, a global IP, or `ignore` for a hostname.
    pub fn set_host_current(&mut self, hostname: &str, target: &str) -> Result<()> {
        let known_global = self.global_ips.contains_key(target);
        let host = self
            .hosts
            .get_mut(hostname)
            .ok_or_else(|| Error::not_found(EntryKind::Host, hostname))?;
        if !host.options.contains_key(target) && !known_global && target != IGNORE {
            return Err(Error::not_found(EntryKind::Option, target));
        }
        host.current = target.to_string();
        debug!("Host {} set to {}", hostname, target);
        Ok(())
    }

    /// Look up a hostname.
    pub fn host(&self, hostname: &str) -> Result<&Host> {
        self.hosts
            .get(hostname)
            .ok_or_else(|| Error::not_found(EntryKind::Host, hostname))
    }
}
