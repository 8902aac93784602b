//! HTML parsing and data extraction.
//!
//! This module extracts icon `<link>` declarations from a page's `<head>`.
//! All parsing is done using CSS selectors via the `scraper` crate.

mod icons;

// Re-export public API
pub use icons::{extract_icon_href, extract_icon_links, IconLinks};
