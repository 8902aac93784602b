// Domain module tests.

use super::*;

fn parse(url: &str) -> Url {
    Url::parse(url).expect("test URL should parse")
}

#[test]
fn test_root_domain_strips_www() {
    assert_eq!(root_domain("www.example.com"), "example.com");
}

#[test]
fn test_root_domain_country_code_tld() {
    // www.amazon.co.uk => amazon.co.uk
    assert_eq!(root_domain("www.amazon.co.uk"), "amazon.co.uk");
}

#[test]
fn test_root_domain_single_label() {
    assert_eq!(root_domain("localhost"), "localhost");
}

#[test]
fn test_root_domain_two_labels_unchanged() {
    assert_eq!(root_domain("github.com"), "github.com");
    // Two labels are used as-is even when they look like a ccTLD pair
    assert_eq!(root_domain("co.uk"), "co.uk");
}

#[test]
fn test_root_domain_many_subdomains() {
    assert_eq!(root_domain("a.b.c.example.com"), "example.com");
    assert_eq!(root_domain("docs.api.example.org"), "example.org");
}

#[test]
fn test_root_domain_short_tld_long_second_level() {
    // Last label short, but second-to-last longer than 3: last 2 labels
    assert_eq!(root_domain("www.example.io"), "example.io");
    assert_eq!(root_domain("blog.github.io"), "github.io");
}

#[test]
fn test_root_domain_three_char_tld_not_collapsed_to_three() {
    // Last label of length 3 is not a ccTLD candidate
    assert_eq!(root_domain("news.bbc.com"), "bbc.com");
}

#[test]
fn test_root_domain_country_code_with_deep_subdomain() {
    assert_eq!(root_domain("a.b.example.com.au"), "example.com.au");
    assert_eq!(root_domain("shop.example.co.jp"), "example.co.jp");
}

#[test]
fn test_base_url_basic() {
    assert_eq!(
        base_url(&parse("https://www.example.com/some/page?q=1")).unwrap(),
        "https://example.com"
    );
}

#[test]
fn test_base_url_keeps_scheme() {
    assert_eq!(
        base_url(&parse("http://www.amazon.co.uk")).unwrap(),
        "http://amazon.co.uk"
    );
}

#[test]
fn test_base_url_keeps_explicit_port() {
    assert_eq!(
        base_url(&parse("http://www.example.com:8080/path")).unwrap(),
        "http://example.com:8080"
    );
}

#[test]
fn test_base_url_default_port_omitted() {
    // url normalizes away the scheme's default port
    assert_eq!(
        base_url(&parse("https://www.example.com:443/")).unwrap(),
        "https://example.com"
    );
}

#[test]
fn test_base_url_ipv4_not_collapsed() {
    assert_eq!(
        base_url(&parse("http://127.0.0.1:3000/")).unwrap(),
        "http://127.0.0.1:3000"
    );
}

#[test]
fn test_base_url_ipv6_bracketed() {
    assert_eq!(base_url(&parse("http://[::1]:8080/")).unwrap(), "http://[::1]:8080");
}

#[test]
fn test_base_url_localhost() {
    assert_eq!(
        base_url(&parse("http://localhost/")).unwrap(),
        "http://localhost"
    );
}

#[test]
fn test_base_url_missing_host() {
    let result = base_url(&parse("mailto:someone@example.com"));
    assert!(matches!(result, Err(ResolveError::MissingHost(_))));
}
