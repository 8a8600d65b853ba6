//! Sequential whois lookup of the collected targets.

use log::error;

use super::LookupReport;
use crate::app::Progress;
use crate::target::normalize_target;
use crate::whois::{lookup_whois, WhoisLookup};

/// Looks up every target in order and collects the successful records.
///
/// A failed lookup is logged; the target is left out of the records.
pub async fn lookup_targets<W>(targets: &[String], whois: &W, progress: Progress) -> LookupReport
where
    W: WhoisLookup + ?Sized,
{
    let mut report = LookupReport {
        total_targets: targets.len(),
        ..Default::default()
    };

    for target in targets {
        progress.step(format!("Processing target: {target}"));
        let query = normalize_target(target);
        progress.step(format!("Normalized target: {query}"));

        match lookup_whois(whois, target, &query).await {
            Ok(record) => {
                progress.step(format!("Retrieved whois data for {query}"));
                report.records.push(record);
                report.succeeded += 1;
            }
            Err(e) => {
                error!("Error retrieving whois for {query}: {e}");
                report.failed += 1;
            }
        }
    }
    report
}
