//! DNS record extraction utilities.

use crate::config::SPF_VERSION_PREFIX;

/// Extracts the SPF record from a set of TXT records.
///
/// SPF records start with "v=spf1". When a domain publishes several, the first
/// one in resolver order wins.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings (character-strings already joined)
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.trim().starts_with(SPF_VERSION_PREFIX))
        .map(|s| s.trim().to_string())
}
