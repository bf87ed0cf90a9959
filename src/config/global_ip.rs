use std::collections::BTreeMap;
use tracing::debug;

use super::{HostsConfig, Replaced};
use crate::error::{EntryKind, Error, Result};

impl HostsConfig {
    /// Add a named global IP.
    ///
    /// An existing name is only replaced with `force`, in which case the
    /// replaced value is returned.
    pub fn add_global_ip(&mut self, name: &str, address: &str, force: bool) -> Result<Option<Replaced>> {
        let replaced = match self.global_ips.get(name) {
            Some(existing) if !force => {
                return Err(Error::AlreadyExists {
                    kind: EntryKind::GlobalIp,
                    name: name.to_string(),
                    existing: existing.clone(),
                    requested: address.to_string(),
                });
            }
            Some(existing) => Some(Replaced {
                name: name.to_string(),
                old: existing.clone(),
                new: address.to_string(),
            }),
            None => None,
        };
        self.global_ips.insert(name.to_string(), address.to_string());
        debug!("Global IP {} => {}", name, address);
        Ok(replaced)
    }

    /// Remove a named global IP, returning its address.
    pub fn remove_global_ip(&mut self, name: &str) -> Result<String> {
        self.global_ips
            .remove(name)
            .ok_or_else(|| Error::not_found(EntryKind::GlobalIp, name))
    }

    /// Store every inventory entry as a global IP, replacing names that already exist.
    pub fn merge_global_ips(&mut self, entries: BTreeMap<String, String>) -> usize {
        let count = entries.len();
        for (name, address) in entries {
            if let Some(old) = self.global_ips.insert(name.clone(), address.clone()) {
                if old != address {
                    debug!("Global IP {} changed ({} => {})", name, old, address);
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HostsConfig {
        let mut config = HostsConfig::default();
        config.global_ips.insert("baz".into(), "10.0.0.4".into());
        config
    }

    #[test]
    fn add_new_global_ip() {
        let mut config = config();
        assert_eq!(config.add_global_ip("foo", "10.0.0.9", false).unwrap(), None);
        assert_eq!(config.global_ips["foo"], "10.0.0.9");
    }

    #[test]
    fn add_existing_without_force_fails_unchanged() {
        let mut config = config();
        let before = config.clone();
        let err = config.add_global_ip("baz", "10.0.0.9", false).unwrap_err();
        assert!(matches!(
            err,
            Error::AlreadyExists { kind: EntryKind::GlobalIp, ref existing, ref requested, .. }
                if existing == "10.0.0.4" && requested == "10.0.0.9"
        ));
        assert_eq!(config, before);
    }

    #[test]
    fn force_overwrite_reports_old_value() {
        let mut config = config();
        let replaced = config.add_global_ip("baz", "10.0.0.9", true).unwrap();
        assert_eq!(
            replaced,
            Some(Replaced { name: "baz".into(), old: "10.0.0.4".into(), new: "10.0.0.9".into() })
        );
        assert_eq!(config.global_ips["baz"], "10.0.0.9");
    }

    #[test]
    fn remove_global_ip() {
        let mut config = config();
        assert_eq!(config.remove_global_ip("baz").unwrap(), "10.0.0.4");
        assert!(config.global_ips.is_empty());

        let err = config.remove_global_ip("baz").unwrap_err();
        assert_eq!(err.to_string(), "Global IP baz does not exist");
    }

    #[test]
    fn merge_replaces_existing_names() {
        let mut config = config();
        let entries: BTreeMap<String, String> = [
            ("baz".to_string(), "10.0.0.5".to_string()),
            ("i-123".to_string(), "10.0.1.1".to_string()),
        ]
        .into();
        assert_eq!(config.merge_global_ips(entries), 2);
        assert_eq!(config.global_ips["baz"], "10.0.0.5");
        assert_eq!(config.global_ips["i-123"], "10.0.1.1");
    }
}
