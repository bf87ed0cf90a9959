use std::io::{self, Write};
use termtree::Tree;

use crate::config::{HostsConfig, Resolution};
use crate::output::tree_label;

/// Build a tree overview of the whole configuration.
pub fn config_tree(config: &HostsConfig) -> Tree<String> {
    let mut root = Tree::new(tree_label("Hosts config"));

    let mut hosts_node = Tree::new(tree_label(format!("hosts ({})", config.hosts.len())));
    for (hostname, host) in &config.hosts {
        let title = match config.resolve(host) {
            Resolution::Option { name, address } => format!("{} => {} ({})", hostname, address, name),
            Resolution::Global { name, address } => {
                format!("{} => {} (global IP {})", hostname, address, name)
            }
            Resolution::Ignored => format!("{} (ignored)", hostname),
            Resolution::Unresolved(name) => format!("{} (no associated IP: {})", hostname, name),
        };
        let mut host_node = Tree::new(title);
        for (name, address) in &host.options {
            host_node.push(Tree::new(tree_label(format!("{}: {}", name, address))));
        }
        hosts_node.push(host_node);
    }
    root.push(hosts_node);

    if !config.global_ips.is_empty() {
        let mut global_node = Tree::new(tree_label("global IPs"));
        for (name, address) in &config.global_ips {
            global_node.push(Tree::new(tree_label(format!("{}: {}", name, address))));
        }
        root.push(global_node);
    }

    if !config.groups.is_empty() {
        let mut groups_node = Tree::new(tree_label("groups"));
        for (group, members) in &config.groups {
            let mut group_node = Tree::new(group.clone());
            for member in members {
                group_node.push(Tree::new(member.clone()));
            }
            groups_node.push(group_node);
        }
        root.push(groups_node);
    }

    if !config.local_hostnames.is_empty() {
        let mut local_node = Tree::new(tree_label("local hostnames"));
        for hostname in &config.local_hostnames {
            local_node.push(Tree::new(hostname.clone()));
        }
        root.push(local_node);
    }

    if config.ipv6_defaults {
        root.push(Tree::new(tree_label("IPv6 defaults: on")));
    }
    root
}

/// Print the configuration overview tree.
pub fn print_config_tree<W: Write>(w: &mut W, config: &HostsConfig) -> io::Result<()> {
    write!(w, "{}", config_tree(config))
}
