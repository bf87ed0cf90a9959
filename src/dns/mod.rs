use std::{net::IpAddr, time::Duration};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub mod resolver;

/// Turn a user supplied address or hostname into an address string.
///
/// IP literals are returned unchanged. Anything else is looked up and the
/// first address returned.
pub async fn resolve_address(input: &str, timeout: Duration) -> Result<String> {
    if input.parse::<IpAddr>().is_ok() {
        return Ok(input.to_string());
    }
    let ips = lookup_ip(input, timeout).await.unwrap_or_default();
    match ips.first() {
        Some(ip) => {
            debug!("Resolved {} to {}", input, ip);
            Ok(ip.to_string())
        }
        None => Err(Error::UnresolvedAddress(input.to_string())),
    }
}

/// Perform a DNS lookup for the given hostname with a timeout.
pub async fn lookup_ip(hostname: &str, timeout: Duration) -> Option<Vec<IpAddr>> {
    let resolver = match resolver::get_resolver(timeout) {
        Ok(resolver) => resolver,
        Err(e) => {
            warn!("DNS resolver unavailable: {:#}", e);
            return None;
        }
    };
    match tokio::time::timeout(
        timeout,
        async move { resolver.lookup_ip(hostname).await }
    ).await {
        Ok(Ok(ips)) => Some(ips.iter().collect()),
        Ok(Err(e)) => {
            debug!("Lookup of {} failed: {}", hostname, e);
            None
        }
        Err(_) => {
            debug!("Lookup of {} timed out after {:?}", hostname, timeout);
            None
        }
    }
}
