//! Configuration constants.
//!
//! This module defines the constants used throughout the resolver, including
//! request timeouts, the default icon identifier and well-known icon paths.

use std::time::Duration;

/// Per-request HTTP timeout applied to every call made by the shared client.
///
/// Covers the root page fetch and each icon probe individually, so a single
/// resolution is bounded by roughly two timeouts (page fetch + slowest probe
/// that has to be awaited).
pub const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(1);

/// Identifier returned when no icon candidate validates.
pub const DEFAULT_FAVICON: &str = "DefaultProfileImageGreen";

/// Conventional icon path probed when no `<link>` candidate validates.
pub const FAVICON_FILE_NAME: &str = "favicon.ico";

/// Icon file extension rejected by policy.
pub const REJECTED_ICON_EXTENSION: &str = ".svg";

/// Default number of sites resolved concurrently by the CLI.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default User-Agent string for HTTP requests.
///
/// Some sites serve a stripped-down page (or a 403) to clients that do not
/// look like a browser, which hides their `<link rel="icon">` tags. Users can
/// override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Diagnostic context keys reported on top-level failures
pub const CONTEXT_KEY_BASE_URL: &str = "baseUrl";
pub const CONTEXT_KEY_SITE: &str = "site";
