// Shared test helpers for resolver integration tests.
//
// This module provides a recording diagnostics sink and resolver/server setup
// used across multiple test files.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use favicon_resolver::{DiagnosticContext, DiagnosticsSink, FaviconResolver};
use httptest::Server;
use url::Url;

/// Diagnostics sink that keeps every report in memory.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(String, DiagnosticContext)>>,
}

#[allow(dead_code)] // Not every test file inspects reports
impl RecordingSink {
    pub fn reports(&self) -> Vec<(String, DiagnosticContext)> {
        self.reports.lock().expect("lock poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.reports.lock().expect("lock poisoned").len()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, error: &anyhow::Error, context: &DiagnosticContext) {
        self.reports
            .lock()
            .expect("lock poisoned")
            .push((format!("{:#}", error), context.clone()));
    }
}

/// Builds a resolver with its own client (never the process-wide one, whose
/// pooled connections would outlive each test's runtime).
pub fn test_resolver(timeout: Duration) -> (FaviconResolver, Arc<RecordingSink>) {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .expect("Failed to build test client");
    let sink = Arc::new(RecordingSink::default());
    let resolver = FaviconResolver::with_client(Arc::new(client)).with_sink(sink.clone());
    (resolver, sink)
}

/// The mock server's root as a site URL.
pub fn site_url(server: &Server) -> Url {
    Url::parse(&server.url("/").to_string()).expect("server URL should parse")
}

/// Absolute URL of `path` on the mock server.
#[allow(dead_code)] // Used by other test files
pub fn server_url(server: &Server, path: &str) -> String {
    server.url(path).to_string()
}

/// An HTML page whose `<head>` holds the given `<link>` tags.
pub fn page_with_links(links: &[(&str, &str)]) -> String {
    let tags: String = links
        .iter()
        .map(|(rel, href)| format!("<link rel=\"{}\" href=\"{}\">\n", rel, href))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Test</title>\n{}</head><body><p>hi</p></body></html>",
        tags
    )
}
