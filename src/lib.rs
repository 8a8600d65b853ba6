//! whoispf library: whois ownership and location lookups
//!
//! This library looks up who owns a set of network targets (IP addresses, CIDR
//! blocks, domains) and where they are, and can expand a domain's SPF policy
//! into the IP ranges allowed to send its mail.
//!
//! # Example
//!
//! ```no_run
//! use whoispf::{render_table, run_lookup, Config, TableStyle};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     targets: vec!["8.8.8.8".to_string(), "193.0.0.0/21".to_string()],
//!     spf: Some("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(&config).await?;
//! println!("{}", render_table(&report.records, TableStyle::Plain));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups are sequential, so the
//! current-thread runtime is enough.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
mod error_handling;
mod export;
pub mod initialization;
mod run;
mod target;
pub mod whois;

// Re-export public API
pub use app::Progress;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FileReadError, InitializationError, LookupError, RunError, SpfError};
pub use export::{render_table, TableStyle, HEADERS};
pub use run::{
    collect_targets, expand_argument, lookup_targets, run_lookup, run_lookup_with, LookupReport,
};
pub use target::{is_target_file, normalize_target, read_targets_from_file};
