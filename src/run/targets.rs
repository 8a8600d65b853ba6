//! Target list assembly.

use std::path::Path;

use log::error;

use crate::app::Progress;
use crate::config::Config;
use crate::dns::{resolve_spf_ips, TxtResolver};
use crate::target::{is_target_file, read_targets_from_file};

/// Assembles the target list: SPF-expanded IPs first, then each positional argument.
///
/// A failing source (SPF domain, unreadable file) is logged and contributes
/// nothing; the remaining sources are still collected.
pub async fn collect_targets<R>(config: &Config, resolver: &R, progress: Progress) -> Vec<String>
where
    R: TxtResolver + ?Sized,
{
    let mut targets = Vec::new();

    if let Some(domain) = config.spf.as_deref().filter(|d| !d.is_empty()) {
        progress.step(format!("Fetching SPF IPs for domain: {domain}"));
        match resolve_spf_ips(resolver, domain).await {
            Ok(ips) => targets.extend(ips),
            Err(e) => error!("Error fetching SPF IPs for domain {domain}: {e}"),
        }
    }

    for arg in &config.targets {
        targets.extend(expand_argument(arg, progress));
    }
    targets
}

/// Expands one positional argument.
///
/// An existing regular file becomes one target per non-blank, non-comment
/// line; anything else is a literal target.
pub fn expand_argument(arg: &str, progress: Progress) -> Vec<String> {
    if !is_target_file(arg) {
        return vec![arg.to_string()];
    }
    progress.step(format!("Reading targets from file: {arg}"));
    match read_targets_from_file(Path::new(arg)) {
        Ok(targets) => targets,
        Err(e) => {
            error!("Error reading file {arg}: {e}");
            Vec::new()
        }
    }
}
