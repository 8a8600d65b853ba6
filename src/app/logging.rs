//! Progress logging utilities.

use std::fmt::Display;
use std::time::Instant;

use log::{debug, info};

/// Reports processing stages.
///
/// With `verbose` set, every stage is printed to standard output (alongside the
/// table, as the user asked for it). Stages are always logged at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    verbose: bool,
}

impl Progress {
    /// Creates a reporter; `verbose` enables stdout output.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Reports one processing stage.
    pub fn step(&self, message: impl Display) {
        debug!("{message}");
        if self.verbose {
            println!("{message}");
        }
    }
}

/// Logs a summary of the lookup run.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `succeeded` - Targets with a whois record
/// * `failed` - Targets whose lookup failed
pub fn log_summary(start_time: Instant, succeeded: usize, failed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Looked up {} targets in {:.2} seconds ({} succeeded, {} failed)",
        succeeded + failed,
        elapsed_secs,
        succeeded,
        failed
    );
}
