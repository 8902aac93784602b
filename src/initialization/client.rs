//! HTTP client initialization.
//!
//! This module provides the process-wide shared client used by default, and
//! a constructor for clients built from a [`Config`].

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT, HTTP_CLIENT_TIMEOUT};
use crate::error_handling::InitializationError;

static SHARED_CLIENT: OnceLock<Arc<reqwest::Client>> = OnceLock::new();

fn build_client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// Initializes an HTTP client from the configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config (applied to connect and total time)
/// - Default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = build_client(config.timeout(), &config.user_agent)?;
    Ok(Arc::new(client))
}

/// Returns the process-wide shared client, building it on first use.
///
/// The shared client uses [`HTTP_CLIENT_TIMEOUT`] and [`DEFAULT_USER_AGENT`].
/// Concurrent first calls may each build a client, but only one is kept and
/// every caller gets that one.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn shared_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(Arc::clone(client));
    }

    let client = Arc::new(build_client(HTTP_CLIENT_TIMEOUT, DEFAULT_USER_AGENT)?);
    Ok(Arc::clone(SHARED_CLIENT.get_or_init(|| client)))
}
