//! JSON form of [`HostsConfig`].
//!
//! Every field of the persisted form is optional. Decoding goes through the
//! `Raw*` mirrors below so that absent or `null` collections become empty
//! ones at this boundary rather than leaking into the model. Encoding omits
//! empty collections, a `false` IPv6 flag and an empty `current`.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{Host, HostsConfig};
use crate::error::Result;

/// Persisted configuration as written, before normalization.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(rename = "localHostnames")]
    local_hostnames: Option<Vec<String>>,
    #[serde(rename = "ipV6Defaults")]
    ipv6_defaults: Option<bool>,
    hosts: Option<BTreeMap<String, Host>>,
    #[serde(rename = "globalIPs")]
    global_ips: Option<BTreeMap<String, String>>,
    groups: Option<BTreeMap<String, Vec<String>>>,
}

impl From<RawConfig> for HostsConfig {
    fn from(raw: RawConfig) -> Self {
        HostsConfig {
            local_hostnames: raw.local_hostnames.unwrap_or_default(),
            ipv6_defaults: raw.ipv6_defaults.unwrap_or(false),
            hosts: raw.hosts.unwrap_or_default(),
            global_ips: raw.global_ips.unwrap_or_default(),
            groups: raw.groups.unwrap_or_default(),
        }
    }
}

/// Persisted host entry as written, before normalization.
#[derive(Debug, Default, Deserialize)]
pub struct RawHost {
    current: Option<String>,
    options: Option<BTreeMap<String, String>>,
}

impl From<RawHost> for Host {
    fn from(raw: RawHost) -> Self {
        Host {
            current: raw.current.unwrap_or_default(),
            options: raw.options.unwrap_or_default(),
        }
    }
}

/// Decode a configuration from its JSON bytes.
pub fn decode(bytes: &[u8]) -> Result<HostsConfig> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a configuration as pretty printed JSON (two space indent, sorted map keys).
pub fn encode(config: &HostsConfig) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TESTING_CONFIG_JSON: &str = r#"{
  "localHostnames": [
    "foo",
    "bar"
  ],
  "ipV6Defaults": true,
  "hosts": {
    "foo.bar": {
      "current": "test",
      "options": {
        "test": "10.0.0.1"
      }
    }
  },
  "globalIPs": {
    "foo": "bar"
  },
  "groups": {
    "fooGroup": [
      "foo.bar"
    ]
  }
}"#;

    fn testing_config() -> HostsConfig {
        HostsConfig {
            local_hostnames: vec!["foo".into(), "bar".into()],
            ipv6_defaults: true,
            hosts: [("foo.bar".to_string(), Host::with_option("test", "10.0.0.1"))].into(),
            global_ips: [("foo".to_string(), "bar".to_string())].into(),
            groups: [("fooGroup".to_string(), vec!["foo.bar".to_string()])].into(),
        }
    }

    #[test]
    fn encode_matches_persisted_layout() {
        let bytes = encode(&testing_config()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), TESTING_CONFIG_JSON);
    }

    #[test]
    fn decode_full_config() {
        let config = decode(TESTING_CONFIG_JSON.as_bytes()).unwrap();
        assert_eq!(config, testing_config());
    }

    #[test]
    fn empty_object_decodes_to_empty_collections() {
        let config = decode(b"{}").unwrap();
        assert_eq!(config, HostsConfig::default());
        assert_eq!(encode(&config).unwrap(), b"{}");
    }

    #[test]
    fn null_collections_decode_to_empty() {
        let config = decode(br#"{"hosts": null, "groups": null, "globalIPs": null}"#).unwrap();
        assert!(config.hosts.is_empty());
        assert!(config.groups.is_empty());
        assert!(config.global_ips.is_empty());
    }

    #[test]
    fn empty_host_is_kept_and_written_back_minimal() {
        let config = decode(br#"{"hosts":{"hostname":{}}}"#).unwrap();
        let host = &config.hosts["hostname"];
        assert!(host.options.is_empty());
        assert_eq!(host.current, "");

        let written = String::from_utf8(encode(&config).unwrap()).unwrap();
        assert_eq!(written, "{\n  \"hosts\": {\n    \"hostname\": {}\n  }\n}");
    }

    #[test]
    fn decode_is_stable_across_round_trip() {
        let input = br#"{"hosts":{"b":{"current":"x"},"a":{"options":{"o":"1.2.3.4"}}},"groups":{"g":["b","a"]}}"#;
        let first = decode(input).unwrap();
        let second = decode(input).unwrap();
        assert_eq!(first, second);

        let again = decode(&encode(&first).unwrap()).unwrap();
        assert_eq!(again, first);
        assert_eq!(again.groups["g"], vec!["b", "a"]);
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode(b"{").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("EOF"));
    }
}
