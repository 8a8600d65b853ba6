//! DNS TXT record queries.

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Source of TXT records.
///
/// SPF expansion only needs TXT lookups, so that is all this trait asks for.
/// Tests implement it over an in-memory map.
#[allow(async_fn_in_trait)] // Only used with concrete, single-threaded resolvers
pub trait TxtResolver {
    /// Returns every TXT record published at `domain`, one string per record.
    ///
    /// A domain without TXT records (or a non-existent domain) yields an empty
    /// vector; only real resolution failures are errors.
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

impl TxtResolver for TokioAsyncResolver {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(domain, self).await
    }
}

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings, or an empty vector if the domain has none.
///
/// # Errors
///
/// Returns `LookupError::Dns` for timeouts, SERVFAIL and other resolver failures.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // A TXT record may be split into several character-strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            log::debug!("Found {} TXT records for {domain}", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => match e.kind() {
            // NXDOMAIN and NODATA both land here - the domain simply has no TXT records
            ResolveErrorKind::NoRecordsFound { .. } => {
                log::debug!("No TXT records for {domain}");
                Ok(Vec::new())
            }
            _ => {
                if matches!(e.kind(), ResolveErrorKind::Timeout) {
                    log::warn!("TXT record lookup timed out for {domain}: {e}");
                } else {
                    log::warn!("Failed to lookup TXT records for {domain}: {e}");
                }
                Err(LookupError::Dns {
                    domain: domain.to_string(),
                    source: e,
                })
            }
        },
    }
}
