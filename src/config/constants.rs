//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including network timeouts and SPF record markers.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most TXT lookups complete in well under a second; 3s fails fast on dead resolvers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS query attempts before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// Whois connect and read timeout in seconds (applies to each server queried)
pub const WHOIS_TIMEOUT_SECS: u64 = 15;

// SPF
/// TXT records carrying an SPF policy start with this version tag
pub const SPF_VERSION_PREFIX: &str = "v=spf1";
/// Qualifier characters that may prefix an SPF mechanism
pub const SPF_QUALIFIERS: &[char] = &['+', '-', '~', '?'];

// Target files
/// Lines in target files starting with this marker are ignored
pub const COMMENT_PREFIX: char = '#';
