use tracing::debug;

use super::default::IGNORE;
use super::{Host, HostsConfig};
use crate::error::{EntryKind, Error, Result};

impl HostsConfig {
    /// Append a hostname to a group.
    ///
    /// The first member creates the group. Later members must be known hosts
    /// and must not already be in the group.
    pub fn add_to_group(&mut self, group: &str, hostname: &str) -> Result<()> {
        match self.groups.get(group) {
            None => {
                self.groups.insert(group.to_string(), vec![hostname.to_string()]);
                debug!("Created group {} with {}", group, hostname);
            }
            Some(members) => {
                if !self.hosts.contains_key(hostname) {
                    return Err(Error::not_found(EntryKind::Host, hostname));
                }
                if members.iter().any(|member| member == hostname) {
                    return Err(Error::AlreadyMember {
                        group: group.to_string(),
                        hostname: hostname.to_string(),
                    });
                }
                if let Some(members) = self.groups.get_mut(group) {
                    members.push(hostname.to_string());
                }
            }
        }
        Ok(())
    }

    /// Point every member of a group at a global IP (or `ignore`).
    ///
    /// Members without a host entry get one bound to the target. Returns the
    /// number of hosts updated.
    pub fn set_group(&mut self, group: &str, target: &str) -> Result<usize> {
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| Error::not_found(EntryKind::Group, group))?;
        if !self.global_ips.contains_key(target) && target != IGNORE {
            return Err(Error::not_found(EntryKind::GlobalIp, target));
        }
        for hostname in members {
            self.hosts
                .entry(hostname.clone())
                .or_insert_with(Host::default)
                .current = target.to_string();
        }
        debug!("Group {} set to {}", group, target);
        Ok(members.len())
    }

    /// Members of a group, sorted.
    pub fn group_members(&self, group: &str) -> Result<Vec<&str>> {
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| Error::not_found(EntryKind::Group, group))?;
        let mut members: Vec<&str> = members.iter().map(String::as_str).collect();
        members.sort_unstable();
        Ok(members)
    }
}
