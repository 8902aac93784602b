//! Reporting of top-level resolution failures.
//!
//! The resolver never surfaces errors to its caller. When a resolution fails
//! before any probe could run (bad input, unreachable root page), the error
//! and a small key-value context are handed to a [`DiagnosticsSink`] and the
//! caller gets the default icon.

use std::collections::BTreeMap;

/// Key-value context attached to a report (`baseUrl`, `site`).
pub type DiagnosticContext = BTreeMap<&'static str, String>;

/// Receiver of fatal resolution failures.
///
/// Implementations must be cheap and must not panic; `report` is called on
/// the resolution path.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, error: &anyhow::Error, context: &DiagnosticContext);
}

/// Sink that writes each report as one `error`-level log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report(&self, error: &anyhow::Error, context: &DiagnosticContext) {
        let fields = context
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        log::error!("Favicon resolution failed: {:#} [{}]", error, fields);
    }
}
