use std::io::{self, Write};

use crate::config::{Host, HostsConfig, Resolution};

/// Describe a host: its options, marking the selected one, then the current
/// selection if it is not one of the options.
pub fn print_host<W: Write>(w: &mut W, config: &HostsConfig, host: &Host) -> io::Result<()> {
    let count = host.options.len();
    writeln!(w, "{} Option{}:", count, if count == 1 { "" } else { "s" })?;
    for (name, address) in &host.options {
        if *name == host.current {
            writeln!(w, "*{} => {}*", name, address)?;
        } else {
            writeln!(w, "{} => {}", name, address)?;
        }
    }

    match config.resolve(host) {
        Resolution::Option { .. } => {}
        Resolution::Global { name, address } => {
            writeln!(w, "Current: Global IP {} => {}", name, address)?;
        }
        Resolution::Ignored => writeln!(w, "Current: {}", host.current)?,
        Resolution::Unresolved(name) => {
            writeln!(w, "Current: {} (Warning: no associated IP please validate your config)", name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default::IGNORE;

    fn config() -> HostsConfig {
        let mut config = HostsConfig::default();
        config.global_ips.insert("baz".into(), "10.0.0.4".into());
        config.hosts.insert("bar".into(), Host::bound_to(IGNORE));
        config.hosts.insert("baz.com".into(), Host {
            current: "baz".into(),
            options: [("bazz".to_string(), "10.0.0.7".to_string())].into(),
        });
        config.hosts.insert("goo".into(), Host::with_option("foop", "10.0.0.8"));
        config.hosts.insert("unknown".into(), Host::bound_to("unknown"));
        config
    }

    fn show(config: &HostsConfig, hostname: &str) -> String {
        let mut out = Vec::new();
        print_host(&mut out, config, &config.hosts[hostname]).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn selected_option_is_marked() {
        assert_eq!(show(&config(), "goo"), "1 Option:\n*foop => 10.0.0.8*\n");
    }

    #[test]
    fn global_ip_selection_is_described() {
        assert_eq!(
            show(&config(), "baz.com"),
            "1 Option:\nbazz => 10.0.0.7\nCurrent: Global IP baz => 10.0.0.4\n"
        );
    }

    #[test]
    fn ignored_host_has_no_warning() {
        assert_eq!(show(&config(), "bar"), "0 Options:\nCurrent: ignore\n");
    }

    #[test]
    fn dangling_current_is_flagged() {
        assert_eq!(
            show(&config(), "unknown"),
            "0 Options:\nCurrent: unknown (Warning: no associated IP please validate your config)\n"
        );
    }
}
