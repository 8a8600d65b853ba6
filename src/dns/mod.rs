//! DNS lookups and SPF expansion.
//!
//! This module provides:
//! - TXT record queries through the `TxtResolver` seam (hickory in production)
//! - SPF record selection from a TXT record set
//! - Recursive SPF expansion of `include:`/`redirect=` into IP literals
//!
//! All operations are async and respect the system DNS configuration.

mod extract;
mod records;
mod spf;

// Re-export public API
pub use extract::extract_spf_record;
pub use records::{lookup_txt_records, TxtResolver};
pub use spf::{parse_spf_terms, resolve_spf_ips, resolve_spf_ips_with, SpfTerm};
