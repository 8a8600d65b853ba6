//! WHOIS client built on `whois-rs`.
//!
//! `whois-rs` picks the server from an embedded server list (per TLD, plus
//! `whois.arin.net` with `n + ` for IP addresses), follows `ReferralServer:` /
//! `Registrar WHOIS Server:` lines, and returns the raw text of the last server.
//! Its lookup is blocking, so each query runs on the blocking thread pool.

use std::sync::Arc;
use std::time::Duration;

use whois_rs::{WhoIs, WhoIsLookupOptions};

use crate::config::WHOIS_TIMEOUT_SECS;
use crate::error_handling::{InitializationError, LookupError};

/// Server list in the node-whois format understood by `whois-rs`.
const WHOIS_SERVERS: &str = include_str!("servers.json");

/// WHOIS client for IP addresses and domains.
#[derive(Clone)]
pub struct WhoisClient {
    whois: Arc<WhoIs>,
    timeout: Duration,
}

impl std::fmt::Debug for WhoisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhoisClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl WhoisClient {
    /// Creates a client from the embedded server list.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::WhoisServersError` if the server list
    /// cannot be loaded.
    pub fn new() -> Result<Self, InitializationError> {
        let whois = WhoIs::from_string(WHOIS_SERVERS)
            .map_err(|e| InitializationError::WhoisServersError(e.to_string()))?;
        Ok(Self {
            whois: Arc::new(whois),
            timeout: Duration::from_secs(WHOIS_TIMEOUT_SECS),
        })
    }

    /// Sets the connect/read timeout applied to each server queried.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up `query` (an IP address or domain) and returns the raw whois text.
    ///
    /// # Errors
    ///
    /// - `LookupError::Whois` if the query is invalid or a server cannot be reached
    /// - `LookupError::EmptyResponse` if the server answered with nothing
    pub async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let mut options =
            WhoIsLookupOptions::from_string(query).map_err(|e| whois_error(query, e))?;
        options.timeout = Some(self.timeout);

        let whois = Arc::clone(&self.whois);
        let text = tokio::task::spawn_blocking(move || whois.lookup(options))
            .await
            .map_err(|e| whois_error(query, e))?
            .map_err(|e| whois_error(query, e))?;

        if text.trim().is_empty() {
            return Err(LookupError::EmptyResponse {
                query: query.to_string(),
            });
        }
        Ok(text)
    }
}

fn whois_error(query: &str, e: impl std::fmt::Display) -> LookupError {
    LookupError::Whois {
        query: query.to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_server_list_loads() {
        assert!(WhoisClient::new().is_ok());
    }

    #[test]
    fn test_server_list_covers_ip_lookups() {
        let servers: serde_json::Value = serde_json::from_str(WHOIS_SERVERS).unwrap();
        assert_eq!(servers["_"]["ip"]["host"], "whois.arin.net");
        assert_eq!(servers["_"]["ip"]["query"], "n + $addr\r\n");
        assert_eq!(servers[""], "whois.iana.org");
    }

    #[test]
    fn test_with_timeout() {
        let client = WhoisClient::new().unwrap().with_timeout(Duration::from_secs(2));
        assert_eq!(client.timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_lookup_ip_live() {
        let client = WhoisClient::new().unwrap();
        let text = client.lookup("8.8.8.8").await.unwrap();
        assert!(text.to_ascii_lowercase().contains("google"));
    }
}
