// whois/mod.rs
// WHOIS lookup via whois-rs and extraction of ownership/location fields

mod client;
mod parse;
mod types;

use log::{debug, info};

use crate::error_handling::LookupError;

pub use client::WhoisClient;
pub use parse::extract_fields;
pub use types::{combine_net_org, WhoisFields, WhoisRecord};

/// Source of raw whois text.
///
/// The pipeline only needs "query in, text out"; tests answer from a map.
#[allow(async_fn_in_trait)] // Only used with concrete, single-threaded clients
pub trait WhoisLookup {
    /// Returns the raw whois response for an IP address or domain.
    async fn whois(&self, query: &str) -> Result<String, LookupError>;
}

impl WhoisLookup for WhoisClient {
    async fn whois(&self, query: &str) -> Result<String, LookupError> {
        self.lookup(query).await
    }
}

/// Performs a WHOIS lookup and builds the display record.
///
/// # Arguments
///
/// * `whois` - The whois source
/// * `target` - The target as supplied by the user (shown in output)
/// * `query` - The normalized form actually sent to whois
///
/// # Errors
///
/// Returns the `LookupError` of the underlying whois query.
pub async fn lookup_whois<W>(whois: &W, target: &str, query: &str) -> Result<WhoisRecord, LookupError>
where
    W: WhoisLookup + ?Sized,
{
    info!("Starting WHOIS lookup for {query}");
    let raw = whois.whois(query).await?;
    let fields = extract_fields(&raw);
    debug!("WHOIS fields for {query}: {fields:?}");
    Ok(WhoisRecord::new(target, fields))
}
