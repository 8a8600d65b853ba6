//! Error type definitions.

use std::path::PathBuf;

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The embedded whois server list could not be loaded.
    #[error("Whois server list error: {0}")]
    WhoisServersError(String),
}

/// A DNS or whois network failure.
#[derive(Error, Debug)]
pub enum LookupError {
    /// DNS resolution failed (timeout, SERVFAIL, unreachable resolver).
    #[error("DNS lookup failed for {domain}: {source}")]
    Dns {
        /// Domain being queried.
        domain: String,
        /// Resolver error.
        #[source]
        source: ResolveError,
    },

    /// The whois query was rejected or a whois server could not be reached.
    #[error("whois lookup failed for {query}: {message}")]
    Whois {
        /// Query that was sent.
        query: String,
        /// Error reported by the whois client.
        message: String,
    },

    /// The server closed the connection without sending anything.
    #[error("whois returned an empty response for {query}")]
    EmptyResponse {
        /// Query that was sent.
        query: String,
    },
}

/// Errors from SPF resolution of one domain.
#[derive(Error, Debug)]
pub enum SpfError {
    /// The TXT lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The domain publishes no `v=spf1` TXT record.
    #[error("no SPF record found for domain {domain}")]
    NoSpfRecord {
        /// Domain whose TXT records were searched.
        domain: String,
    },
}

/// A target file could not be read.
#[derive(Error, Debug)]
#[error("failed to read targets from {}: {source}", path.display())]
pub struct FileReadError {
    /// Path of the target file.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Errors that stop a run from producing any output.
#[derive(Error, Debug)]
pub enum RunError {
    /// Neither the SPF domain nor the positional arguments produced a target.
    #[error("no targets to look up")]
    NoTargets,

    /// A shared resource (whois client) could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}
