use std::time::Duration;

use anyhow::{Context, Result};
use hickory_resolver::TokioResolver;

/// Build a resolver from the system DNS configuration.
///
/// Each query gets a single attempt bounded by `timeout`.
pub fn get_resolver(timeout: Duration) -> Result<TokioResolver> {
    let mut builder = TokioResolver::builder_tokio().context("read system DNS configuration")?;
    let opts = builder.options_mut();
    opts.timeout = timeout;
    opts.attempts = 1;
    Ok(builder.build())
}
