//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, whois servers, limits)
//! - CLI option types and parsing
//! - Compatibility rewriting of single-dash long flags

mod args;
mod constants;
mod types;

// Re-export all constants
pub use args::normalize_flag_args;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, USAGE};
