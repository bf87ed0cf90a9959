use std::io::{self, Write};

use crate::config::HostsConfig;

/// Print group names, sorted.
pub fn print_groups<W: Write>(w: &mut W, config: &HostsConfig) -> io::Result<()> {
    super::print_names(w, config.groups.keys().map(String::as_str))
}

/// Print the members of one group, sorted.
pub fn print_members<W: Write>(w: &mut W, members: &[&str]) -> io::Result<()> {
    super::print_names(w, members.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_print_sorted() {
        let mut config = HostsConfig::default();
        config.groups.insert("web".into(), vec!["a".into()]);
        config.groups.insert("db".into(), vec!["b".into()]);
        let mut out = Vec::new();
        print_groups(&mut out, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "db\nweb\n");
    }
}
