use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Read a hosts file and collect the addresses of every hostname in it.
pub fn read_hosts_file(path: &Path) -> Result<BTreeMap<String, Vec<String>>> {
    let text = crate::fs::read_text(path)?;
    let hosts = parse_hosts(&text);
    debug!("Read {} hostnames from {}", hosts.len(), path.display());
    Ok(hosts)
}

/// Parse hosts file text into hostname -> addresses, in file order.
///
/// Lines whose first field is not an IP address are skipped. Repeated
/// (hostname, address) pairs are kept.
pub fn parse_hosts(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut hosts: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for line in text.lines() {
        if let Some((address, hostnames)) = parse_line(line) {
            for hostname in hostnames {
                hosts
                    .entry(hostname.to_string())
                    .or_default()
                    .push(address.to_string());
            }
        }
    }
    hosts
}

fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let mut words = line.split_whitespace();
    let address = words.next()?;
    let hostnames: Vec<&str> = words.collect();
    if hostnames.is_empty() || address.parse::<IpAddr>().is_err() {
        return None;
    }
    Some((address, hostnames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typical_hosts_file() {
        let hosts = parse_hosts(
            "\
# Comment line
127.0.0.1\tlocalhost localhost.localdomain
::1             ip6-localhost

192.168.10.1    foo foo.bar foo.local # Mid-line comment
   # indented comment
",
        );

        assert_eq!(hosts["localhost"], vec!["127.0.0.1"]);
        assert_eq!(hosts["localhost.localdomain"], vec!["127.0.0.1"]);
        assert_eq!(hosts["ip6-localhost"], vec!["::1"]);
        assert_eq!(hosts["foo"], vec!["192.168.10.1"]);
        assert_eq!(hosts["foo.local"], vec!["192.168.10.1"]);
        assert_eq!(hosts.len(), 6);
    }

    #[test]
    fn addresses_accumulate_in_file_order() {
        let hosts = parse_hosts("10.0.0.3 foo\n10.0.0.2 foo bar\n10.0.0.3 foo\n");
        assert_eq!(hosts["foo"], vec!["10.0.0.3", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(hosts["bar"], vec!["10.0.0.2"]);
    }

    #[test]
    fn invalid_lines_are_skipped() {
        let hosts = parse_hosts("not-an-ip foo\n10.0.0.1\n10.0.0.400 bar\n#10.0.0.1 baz\n10.0.0.1#qux\n");
        assert!(hosts.is_empty());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = read_hosts_file(Path::new("/doesntexist")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
