//! Flat hosts file format: `<address> <hostname> [<hostname> ...]` per line.

pub mod parser;
pub mod render;

pub use parser::{parse_hosts, read_hosts_file};
pub use render::{render_hosts, write_hosts_file};
