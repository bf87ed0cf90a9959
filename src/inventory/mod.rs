//! External name to address inventories.
//!
//! An inventory lists machines (instances, load balancers, ...) by name
//! together with an address or DNS name for each. Entries end up as global
//! IPs, or as hosts when a fresh configuration is seeded from one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// A source of name to address pairs.
pub trait Inventory {
    fn read_all(&self) -> Result<BTreeMap<String, String>>;
}

/// Inventory stored as a JSON object of name to address.
#[derive(Debug, Clone)]
pub struct JsonInventory {
    path: PathBuf,
}

impl JsonInventory {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Inventory for JsonInventory {
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let bytes = crate::fs::read_bytes(&self.path)?;
        let entries: BTreeMap<String, String> = serde_json::from_slice(&bytes)?;
        debug!("Read {} inventory entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }
}

/// Resolve every inventory address, failing on the first one that cannot be resolved.
pub async fn resolve_entries(
    entries: BTreeMap<String, String>,
    timeout: Duration,
) -> Result<BTreeMap<String, String>> {
    let mut resolved = BTreeMap::new();
    for (name, address) in entries {
        let address = crate::dns::resolve_address(&address, timeout).await?;
        resolved.insert(name, address);
    }
    Ok(resolved)
}
