//! Error type definitions.
//!
//! This module defines the error and outcome types used throughout the resolver.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Top-level resolution failures.
///
/// These are the failures that get reported to the diagnostics sink. They
/// never reach the caller of the resolver, which receives the default icon
/// instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The input could not be parsed as an absolute URL.
    #[error("Invalid site URL '{0}'")]
    InvalidSite(String),

    /// The URL has no host to derive a root domain from.
    #[error("Site URL '{0}' has no host component")]
    MissingHost(String),

    /// The shared HTTP client could not be built.
    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(#[from] InitializationError),

    /// Requesting the root page failed (DNS, connect, timeout).
    #[error("Failed to fetch root page {base_url}")]
    RootPageFetch {
        base_url: String,
        #[source]
        source: ReqwestError,
    },

    /// The root page responded but its body could not be read.
    #[error("Failed to read root page body from {base_url}")]
    RootPageBody {
        base_url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Why a single probe produced no candidate.
///
/// Probe errors are local: they are logged at debug level and turn the probe
/// into "no candidate" without affecting sibling probes.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("no matching <link> element with an href")]
    NoCandidate,

    #[error("SVG icons are not supported")]
    SvgRejected,

    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    #[error("unsuccessful status {0}")]
    Status(u16),

    #[error("probe task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// How a resolution ended, for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ResolutionOutcome {
    /// One of the probes validated.
    Resolved,
    /// All probes came back empty.
    Default,
    /// A top-level failure was reported to the diagnostics sink.
    Reported,
}

impl ResolutionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionOutcome::Resolved => "Resolved",
            ResolutionOutcome::Default => "Default icon (no candidate)",
            ResolutionOutcome::Reported => "Default icon (reported failure)",
        }
    }
}

impl std::fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
