// Parse module tests.

use super::*;
use crate::models::IconKind;
use scraper::Html;

const FULL_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Example</title>
    <link rel="stylesheet" href="/style.css">
    <link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
    <link rel="shortcut icon" href="https://cdn.example.com/favicon.ico">
    <link rel="icon" type="image/png" href="/icon-32.png">
</head>
<body><p>hello</p></body>
</html>"#;

#[test]
fn test_extract_icon_links_all_kinds() {
    let links = extract_icon_links(FULL_HEAD);
    assert_eq!(links.len(), 3);
    assert_eq!(
        links.get(IconKind::AppleTouchIcon),
        Some("/apple-touch-icon.png")
    );
    assert_eq!(
        links.get(IconKind::ShortcutIcon),
        Some("https://cdn.example.com/favicon.ico")
    );
    assert_eq!(links.get(IconKind::Icon), Some("/icon-32.png"));
    assert_eq!(links.get(IconKind::FaviconIco), None);
}

#[test]
fn test_extract_icon_links_empty_page() {
    let links = extract_icon_links("");
    assert!(links.is_empty());
}

#[test]
fn test_extract_icon_links_no_icons() {
    let links = extract_icon_links("<html><head><title>t</title></head><body></body></html>");
    assert!(links.is_empty());
}

#[test]
fn test_shortcut_icon_does_not_match_icon_probe() {
    let html = r#"<html><head><link rel="shortcut icon" href="/s.ico"></head></html>"#;
    let links = extract_icon_links(html);
    assert_eq!(links.get(IconKind::ShortcutIcon), Some("/s.ico"));
    assert_eq!(links.get(IconKind::Icon), None);
}

#[test]
fn test_first_matching_link_without_href_yields_none() {
    let html = r#"<html><head>
        <link rel="icon">
        <link rel="icon" href="/second.png">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_icon_href(&document, "icon"), None);
}

#[test]
fn test_first_matching_link_wins() {
    let html = r#"<html><head>
        <link rel="icon" href="/first.png">
        <link rel="icon" href="/second.png">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_icon_href(&document, "icon"),
        Some("/first.png".to_string())
    );
}

#[test]
fn test_any_attribute_value_matches() {
    let html = r#"<html><head><link itemprop="apple-touch-icon" href="/touch.png"></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_icon_href(&document, "apple-touch-icon"),
        Some("/touch.png".to_string())
    );
}

#[test]
fn test_value_match_is_exact() {
    let html = r#"<html><head><link rel="apple-touch-icon-precomposed" href="/p.png"></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_icon_href(&document, "apple-touch-icon"), None);
}

#[test]
fn test_links_outside_head_are_ignored() {
    // A <link> after body content stays in <body> after html5ever tree building
    let html = r#"<html><head><title>t</title></head>
        <body><div><link rel="icon" href="/body.png"></div></body></html>"#;
    let links = extract_icon_links(html);
    assert_eq!(links.get(IconKind::Icon), None);
}

#[test]
fn test_malformed_markup_is_tolerated() {
    let html = r#"<head><link rel="icon" href="/ok.png"<title>broken"#;
    // Must not panic; the result depends on html5ever's recovery
    let _ = extract_icon_links(html);
}

#[test]
fn test_empty_href_yields_none() {
    let html = r#"<html><head><link rel="icon" href="  "></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_icon_href(&document, "icon"), None);
}
