//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, `RUST_LOG` aware)
//! - DNS resolver
//! - Whois client

mod logger;
mod resolver;

use crate::error_handling::InitializationError;
use crate::whois::WhoisClient;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the whois client from the embedded server list.
///
/// # Errors
///
/// Returns `InitializationError::WhoisServersError` if the server list is invalid.
pub fn init_whois_client() -> Result<WhoisClient, InitializationError> {
    WhoisClient::new()
}
