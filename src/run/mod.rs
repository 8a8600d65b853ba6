//! The lookup run: collect targets, look each one up, report.

mod lookup;
mod targets;

use std::time::Instant;

use hickory_resolver::TokioAsyncResolver;
use log::info;

use crate::app::{log_summary, Progress};
use crate::config::Config;
use crate::dns::TxtResolver;
use crate::error_handling::RunError;
use crate::initialization::{init_resolver, init_whois_client};
use crate::whois::{WhoisClient, WhoisLookup, WhoisRecord};

pub use lookup::lookup_targets;
pub use targets::{collect_targets, expand_argument};

/// Results of a lookup run.
#[derive(Debug, Clone, Default)]
pub struct LookupReport {
    /// One record per successfully looked-up target, in input order
    pub records: Vec<WhoisRecord>,
    /// Number of targets assembled from all sources
    pub total_targets: usize,
    /// Targets with a whois record
    pub succeeded: usize,
    /// Targets whose whois lookup failed (logged and skipped)
    pub failed: usize,
}

/// Runs a lookup with the system DNS resolver and the default whois client.
///
/// # Errors
///
/// - `RunError::Initialization` if the whois client cannot be set up
/// - `RunError::NoTargets` if neither `--spf` nor the positional arguments
///   produced a target
///
/// # Example
///
/// ```no_run
/// use whoispf::{run_lookup, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     targets: vec!["8.8.8.8".to_string()],
///     ..Default::default()
/// };
/// let report = run_lookup(&config).await?;
/// println!("{} records", report.records.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_lookup(config: &Config) -> Result<LookupReport, RunError> {
    let resolver: TokioAsyncResolver = init_resolver();
    let whois: WhoisClient = init_whois_client()?;
    run_lookup_with(config, &resolver, &whois).await
}

/// Runs a lookup against the given DNS and whois sources.
///
/// Targets are processed one at a time, in order. Individual failures are
/// logged and skipped; only an empty target list fails the run.
pub async fn run_lookup_with<R, W>(
    config: &Config,
    resolver: &R,
    whois: &W,
) -> Result<LookupReport, RunError>
where
    R: TxtResolver + ?Sized,
    W: WhoisLookup + ?Sized,
{
    let progress = Progress::new(config.verbose);
    let targets = collect_targets(config, resolver, progress).await;
    if targets.is_empty() {
        return Err(RunError::NoTargets);
    }
    info!("Collected {} targets", targets.len());

    let start_time = Instant::now();
    let report = lookup_targets(&targets, whois, progress).await;
    log_summary(start_time, report.succeeded, report.failed);
    Ok(report)
}
