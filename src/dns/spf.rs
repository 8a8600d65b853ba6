//! Recursive SPF expansion.
//!
//! Turns the SPF policy of a domain into the flat list of IP literals it
//! authorizes, following `include:` and `redirect=` into other domains.

use std::collections::HashSet;

use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, warn};

use super::extract::extract_spf_record;
use super::records::TxtResolver;
use crate::config::SPF_QUALIFIERS;
use crate::error_handling::SpfError;

/// The SPF terms that contribute to IP expansion.
///
/// Everything else in a record (`a`, `mx`, `ptr`, `exists`, `all`, `exp=`,
/// unknown modifiers) does not name an address literal and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpfTerm<'r> {
    /// `ip4:` or `ip6:` value, kept verbatim (may carry a prefix length)
    Ip(&'r str),
    /// `include:` target domain
    Include(&'r str),
    /// `redirect=` target domain
    Redirect(&'r str),
}

/// Splits an SPF record into the terms relevant for IP expansion, in record order.
///
/// Leading qualifiers (`+`, `-`, `~`, `?`) are stripped. Mechanism names are
/// matched case-insensitively.
pub fn parse_spf_terms(record: &str) -> impl Iterator<Item = SpfTerm<'_>> {
    record.split_whitespace().filter_map(|token| {
        let token = token.trim_start_matches(SPF_QUALIFIERS);
        if let Some(ip) = strip_prefix_ignore_case(token, "ip4:") {
            Some(SpfTerm::Ip(ip))
        } else if let Some(ip) = strip_prefix_ignore_case(token, "ip6:") {
            Some(SpfTerm::Ip(ip))
        } else if let Some(domain) = strip_prefix_ignore_case(token, "include:") {
            Some(SpfTerm::Include(domain))
        } else {
            strip_prefix_ignore_case(token, "redirect=").map(SpfTerm::Redirect)
        }
    })
}

fn strip_prefix_ignore_case<'t>(token: &'t str, prefix: &str) -> Option<&'t str> {
    let head = token.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &token[prefix.len()..])
}

/// Resolves every IP literal authorized by the SPF policy of `domain`.
///
/// Starts a fresh visited set, so each call is an independent run.
///
/// # Errors
///
/// - `SpfError::Lookup` if the TXT lookup for `domain` itself fails
/// - `SpfError::NoSpfRecord` if `domain` publishes no `v=spf1` record
///
/// Failures of nested includes/redirects are logged and skipped.
pub async fn resolve_spf_ips<R>(resolver: &R, domain: &str) -> Result<Vec<String>, SpfError>
where
    R: TxtResolver + ?Sized,
{
    let mut visited = HashSet::new();
    resolve_spf_ips_with(resolver, domain, &mut visited).await
}

/// Resolves SPF IPs for `domain`, recording every expanded domain in `visited`.
///
/// A domain already present in `visited` expands to nothing; this is what
/// breaks include cycles. Domains are recorded lowercased without a trailing
/// dot, so `Example.com.` and `example.com` are the same visit.
///
/// IPs are returned in encounter order: a nested include contributes its IPs
/// at the position of the `include:` term. Duplicates are kept.
pub fn resolve_spf_ips_with<'a, R>(
    resolver: &'a R,
    domain: &'a str,
    visited: &'a mut HashSet<String>,
) -> LocalBoxFuture<'a, Result<Vec<String>, SpfError>>
where
    R: TxtResolver + ?Sized,
{
    async move {
        if !visited.insert(visit_key(domain)) {
            debug!("SPF domain {domain} already expanded, skipping");
            return Ok(Vec::new());
        }

        let txt_records = resolver.lookup_txt(domain).await?;
        let record = extract_spf_record(&txt_records).ok_or_else(|| SpfError::NoSpfRecord {
            domain: domain.to_string(),
        })?;
        debug!("SPF record for {domain}: {record}");

        let mut ips = Vec::new();
        for term in parse_spf_terms(&record) {
            let (kind, target) = match term {
                SpfTerm::Ip(ip) => {
                    ips.push(ip.to_string());
                    continue;
                }
                SpfTerm::Include(target) => ("include", target),
                SpfTerm::Redirect(target) => ("redirect", target),
            };
            if target.is_empty() {
                warn!("Ignoring {kind} without a domain in SPF record of {domain}");
                continue;
            }
            match resolve_spf_ips_with(resolver, target, visited).await {
                Ok(nested) => ips.extend(nested),
                Err(e) => warn!("Error fetching SPF for {kind} domain {target}: {e}"),
            }
        }
        Ok(ips)
    }
    .boxed_local()
}

fn visit_key(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}
