//! Icon link extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use strum::IntoEnumIterator;

use crate::models::IconKind;

const HEAD_LINK_SELECTOR_STR: &str = "head link";

static HEAD_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(HEAD_LINK_SELECTOR_STR, "HEAD_LINK_SELECTOR")
});

/// Raw `href` values of the icon links found in a page, keyed by probe kind.
///
/// Only kinds with a `<link>` declaration (everything except
/// `IconKind::FaviconIco`) can appear here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconLinks {
    hrefs: HashMap<IconKind, String>,
}

impl IconLinks {
    /// The raw `href` for `kind`, if the page declared one.
    pub fn get(&self, kind: IconKind) -> Option<&str> {
        self.hrefs.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }
}

/// Finds the `href` of the first `<head><link>` carrying `link_value`.
///
/// A link matches when *any* of its attributes has exactly `link_value` as
/// its value, so `rel="icon"` and e.g. `itemprop="icon"` both match, while
/// `rel="shortcut icon"` does not match `"icon"`. Only the first matching
/// link (in document order) is considered: if it has no (or an empty) `href`,
/// there is no candidate even when a later link would have had one.
pub fn extract_icon_href(document: &Html, link_value: &str) -> Option<String> {
    let link = document
        .select(&HEAD_LINK_SELECTOR)
        .find(|element| element.value().attrs().any(|(_, value)| value == link_value))?;

    match link.value().attr("href").map(str::trim) {
        Some(href) if !href.is_empty() => Some(href.to_string()),
        _ => {
            log::debug!("First <link> matching '{}' has no usable href", link_value);
            None
        }
    }
}

/// Parses `html` and collects the icon links for every HTML probe kind.
///
/// Parsing is lenient: malformed markup yields whatever html5ever recovers,
/// and an unparseable page simply produces an empty `IconLinks`.
pub fn extract_icon_links(html: &str) -> IconLinks {
    let document = Html::parse_document(html);

    let hrefs = IconKind::iter()
        .filter_map(|kind| {
            let link_value = kind.link_value()?;
            let href = extract_icon_href(&document, link_value)?;
            Some((kind, href))
        })
        .collect();

    IconLinks { hrefs }
}
