//! Icon candidate construction and validation.
//!
//! A probe turns an optional candidate URL into either a validated URL or
//! nothing. Candidates come from `<link>` hrefs resolved against the base
//! URL, or from the conventional `/favicon.ico` path.

use std::sync::Arc;

use crate::config::{FAVICON_FILE_NAME, REJECTED_ICON_EXTENSION};
use crate::error_handling::ProbeError;
use crate::models::IconKind;

/// Resolves a `<link>` href against the base URL.
///
/// - anything containing `"http"` is taken as already absolute
/// - protocol-relative hrefs (`//cdn.example.com/i.png`) get the base scheme
/// - rooted paths are appended to the base URL
/// - bare relative paths are joined with a `/`
pub(crate) fn resolve_icon_href(href: &str, base_url: &str) -> String {
    let href = href.trim();

    if href.contains("http") {
        return href.to_string();
    }

    if href.starts_with("//") {
        let scheme = base_url.split("://").next().unwrap_or("https");
        return format!("{}:{}", scheme, href);
    }

    let base = base_url.trim_matches('/');
    if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

/// Builds the conventional `favicon.ico` URL for a base URL.
pub(crate) fn favicon_ico_url(base_url: &str) -> String {
    // Base URLs never end in '/', so the separator is always added here
    format!("{}/{}", base_url.trim_end_matches('/'), FAVICON_FILE_NAME)
}

fn has_rejected_extension(url: &str) -> bool {
    let extension_len = REJECTED_ICON_EXTENSION.len();
    url.len() >= extension_len
        && url
            .get(url.len() - extension_len..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(REJECTED_ICON_EXTENSION))
}

/// Checks a candidate: SVG is rejected outright, everything else must
/// answer a direct GET with a success status.
pub(crate) async fn validate_candidate(
    client: &reqwest::Client,
    url: &str,
) -> Result<(), ProbeError> {
    if has_rejected_extension(url) {
        return Err(ProbeError::SvgRejected);
    }

    let response = client.get(url).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProbeError::Status(status.as_u16()))
    }
}

/// Returns `true` if `url` is present, not an SVG, and reachable with a
/// success status. Request failures count as invalid.
pub async fn is_url_valid(client: &reqwest::Client, url: Option<&str>) -> bool {
    match url {
        Some(url) => validate_candidate(client, url).await.is_ok(),
        None => false,
    }
}

/// Runs one probe to completion. Never fails: every error becomes `None`.
pub(crate) async fn run_probe(
    client: Arc<reqwest::Client>,
    kind: IconKind,
    candidate: Option<String>,
) -> Option<String> {
    let result = match candidate {
        Some(url) => validate_candidate(&client, &url).await.map(|()| url),
        None => Err(ProbeError::NoCandidate),
    };

    match result {
        Ok(url) => {
            log::debug!("{} probe validated {}", kind, url);
            Some(url)
        }
        Err(e) => {
            log::debug!("{} probe yielded no icon: {}", kind, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_icon_href_absolute() {
        assert_eq!(
            resolve_icon_href("https://cdn.example.com/icon.png", "https://example.com"),
            "https://cdn.example.com/icon.png"
        );
    }

    #[test]
    fn test_resolve_icon_href_rooted() {
        assert_eq!(
            resolve_icon_href("/img/favicon.png", "https://example.com"),
            "https://example.com/img/favicon.png"
        );
    }

    #[test]
    fn test_resolve_icon_href_trims_base_slash() {
        assert_eq!(
            resolve_icon_href("/favicon.png", "https://example.com/"),
            "https://example.com/favicon.png"
        );
    }

    #[test]
    fn test_resolve_icon_href_bare_relative() {
        assert_eq!(
            resolve_icon_href("static/icon.png", "https://example.com"),
            "https://example.com/static/icon.png"
        );
    }

    #[test]
    fn test_resolve_icon_href_protocol_relative() {
        assert_eq!(
            resolve_icon_href("//cdn.example.com/icon.png", "http://example.com"),
            "http://cdn.example.com/icon.png"
        );
    }

    #[test]
    fn test_resolve_icon_href_http_substring_counts_as_absolute() {
        // Any href containing "http" is used verbatim
        assert_eq!(
            resolve_icon_href("/assets/http-icon.png", "https://example.com"),
            "/assets/http-icon.png"
        );
    }

    #[test]
    fn test_favicon_ico_url() {
        assert_eq!(
            favicon_ico_url("https://example.com"),
            "https://example.com/favicon.ico"
        );
        assert_eq!(
            favicon_ico_url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/favicon.ico"
        );
    }

    #[test]
    fn test_has_rejected_extension() {
        assert!(has_rejected_extension("https://example.com/icon.svg"));
        assert!(has_rejected_extension("https://example.com/ICON.SVG"));
        assert!(!has_rejected_extension("https://example.com/icon.png"));
        assert!(!has_rejected_extension("https://example.com/icon.svg?v=2"));
        assert!(!has_rejected_extension("svg"));
    }

    #[tokio::test]
    async fn test_is_url_valid_absent() {
        let client = reqwest::Client::new();
        assert!(!is_url_valid(&client, None).await);
    }

    #[tokio::test]
    async fn test_svg_rejected_without_request() {
        // Unroutable host: a request would fail, but SVG is rejected first
        let client = reqwest::Client::new();
        let result = validate_candidate(&client, "http://192.0.2.1/icon.svg").await;
        assert!(matches!(result, Err(ProbeError::SvgRejected)));
    }

    #[tokio::test]
    async fn test_run_probe_without_candidate() {
        let client = Arc::new(reqwest::Client::new());
        assert_eq!(run_probe(client, IconKind::Icon, None).await, None);
    }
}
