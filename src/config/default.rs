/// Address for hostnames that name this machine (Debian-style `127.0.1.1`)
pub const LOCAL_ADDR: &str = "127.0.1.1";
/// IPv4 loopback address
pub const LOOPBACK_V4_ADDR: &str = "127.0.0.1";
/// Option name given to the first address of an imported hostname
pub const DEFAULT_OPTION_NAME: &str = "default";
/// Sentinel `current` value that keeps a hostname out of the rendered file
pub const IGNORE: &str = "ignore";
/// Default hosts file read by `create-config`
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";
/// Default per-lookup DNS timeout in milliseconds
pub const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 2000;

/// Hostnames always rendered for the IPv4 loopback address
pub const LOOPBACK_V4_HOSTNAMES: [&str; 4] = [
    "localhost",
    "localhost.localdomain",
    "localhost4",
    "localhost4.localdomain4",
];

/// Well-known IPv6 entries rendered when `ipV6Defaults` is set
pub const IPV6_DEFAULTS: [(&str, &[&str]); 5] = [
    (
        "::1",
        &[
            "ip6-localhost",
            "ip6-loopback",
            "localhost",
            "localhost.localdomain",
            "localhost6",
            "localhost6.localdomain6",
        ],
    ),
    ("fe00::0", &["ip6-localnet"]),
    ("ff00::0", &["ip6-mcastprefix"]),
    ("ff02::1", &["ip6-allnodes"]),
    ("ff02::2", &["ip6-allrouters"]),
];
