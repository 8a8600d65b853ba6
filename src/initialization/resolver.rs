//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver used for SPF TXT lookups.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent). If that cannot be read, falls back to the hickory default
/// configuration (Google DNS: 8.8.8.8, 8.8.4.4) and logs a warning.
///
/// Timeouts are shortened so a dead resolver fails the SPF branch quickly
/// instead of hanging the run.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // SPF include targets are always fully qualified; never append search domains
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}
