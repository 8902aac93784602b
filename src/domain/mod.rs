//! Root-domain extraction and base-URL derivation.
//!
//! Key functions:
//! - `root_domain()` - Collapses a host name to its registrable domain
//! - `base_url()` - Builds `scheme://root-domain[:port]` for a site

use url::{Host, Url};

use crate::error_handling::ResolveError;

/// Extracts the registrable domain from a host name.
///
/// Uses a label-length heuristic rather than the Public Suffix List:
///
/// - fewer than 3 labels: the host is returned unchanged
/// - last label shorter than 3 chars and second-to-last at most 3 chars:
///   the last 3 labels (`www.amazon.co.uk` -> `amazon.co.uk`)
/// - otherwise the last 2 labels (`www.example.com` -> `example.com`)
///
/// The heuristic is knowingly imprecise for some hosts (`www.bbc.co`
/// collapses to `www.bbc.co`), which is acceptable for picking a page
/// to scrape icons from.
pub fn root_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    let count = labels.len();

    if count < 3 {
        return host.to_string();
    }

    // handle two-part country code TLDs
    if labels[count - 1].len() < 3 && labels[count - 2].len() <= 3 {
        labels[count - 3..].join(".")
    } else {
        labels[count - 2..].join(".")
    }
}

/// Builds the base URL probed for icons: `scheme://root-domain`.
///
/// IP-address hosts have no registrable domain and are kept as-is. An
/// explicit port is preserved. The result never has a trailing slash.
///
/// # Errors
///
/// Returns `ResolveError::MissingHost` if the URL has no host.
pub fn base_url(site: &Url) -> Result<String, ResolveError> {
    let host = match site.host() {
        Some(Host::Domain(domain)) => root_domain(domain),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => format!("[{}]", addr),
        None => return Err(ResolveError::MissingHost(site.to_string())),
    };

    if host.is_empty() {
        return Err(ResolveError::MissingHost(site.to_string()));
    }

    Ok(match site.port() {
        Some(port) => format!("{}://{}:{}", site.scheme(), host, port),
        None => format!("{}://{}", site.scheme(), host),
    })
}
