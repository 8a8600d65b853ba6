//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

/// Usage text printed when no targets could be assembled.
pub const USAGE: &str = "\
Usage: whoispf [options] target1 [target2 ...]
Targets can be IP addresses, CIDR ranges (only the first IP is used), or file paths containing a list of targets.
Options:
  -spf string    Domain to fetch SPF allowed IPs recursively.
  -plain         Disable fancy mode and use plain text output.
  -verbose       Enable verbose output of operations.";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary, or built programmatically with
/// `..Default::default()` when the crate is used as a library.
///
/// # Examples
///
/// ```bash
/// # Look up two addresses and every host in a file
/// whoispf 8.8.8.8 192.0.2.0/24 targets.txt
///
/// # Expand the SPF senders of a domain, plain output
/// whoispf -spf example.com -plain
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "whoispf",
    about = "Looks up whois ownership and location for IPs, CIDR ranges, and SPF senders."
)]
pub struct Config {
    /// IP addresses, CIDR ranges, domains, or files with one target per line
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Domain to fetch SPF allowed IPs recursively
    #[arg(long, value_name = "DOMAIN")]
    pub spf: Option<String>,

    /// Disable fancy mode and use plain text output
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub plain: bool,

    /// Enable verbose output of operations
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            spf: None,
            plain: false,
            verbose: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
