//! Error handling and resolution statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, top-level resolution and probes
//! - Resolution statistics tracking (winning probe, outcome)
//!
//! Failures are categorized into:
//! - **Top-level**: the site or its root page is unusable; reported to the diagnostics sink
//! - **Probe**: a single candidate is unusable; logged and skipped

mod stats;
mod types;

// Re-export public API
pub use stats::ProbeStats;
pub use types::{InitializationError, ProbeError, ResolutionOutcome, ResolveError};
