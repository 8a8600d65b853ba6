//! Main application modules.
//!
//! This module provides the progress and summary logging used by the lookup run.

pub mod logging;

// Re-export public API
pub use logging::{log_summary, Progress};
