//! Core data types shared by the resolver, the CLI and the statistics.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::DEFAULT_FAVICON;

/// The four icon probes, declared in priority order.
///
/// `IconKind::iter()` yields the kinds in the order results are selected:
/// an earlier kind always wins over a later one when both validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum IconKind {
    /// `<link rel="apple-touch-icon">`
    AppleTouchIcon,
    /// `<link rel="shortcut icon">`
    ShortcutIcon,
    /// `<link rel="icon">`
    Icon,
    /// Conventional `/favicon.ico` path
    FaviconIco,
}

impl IconKind {
    /// The `<link>` attribute value this probe matches, if it is an HTML probe.
    pub fn link_value(&self) -> Option<&'static str> {
        match self {
            IconKind::AppleTouchIcon => Some("apple-touch-icon"),
            IconKind::ShortcutIcon => Some("shortcut icon"),
            IconKind::Icon => Some("icon"),
            IconKind::FaviconIco => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::AppleTouchIcon => "apple-touch-icon",
            IconKind::ShortcutIcon => "shortcut icon",
            IconKind::Icon => "icon",
            IconKind::FaviconIco => "favicon.ico",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a resolution: a validated icon URL or the default icon.
///
/// There is no empty state. Every call to the resolver produces exactly one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconReference {
    /// An absolute icon URL that answered a GET with a success status.
    Resolved(String),
    /// No candidate validated; stands for [`DEFAULT_FAVICON`].
    Default,
}

impl IconReference {
    /// The icon URL, or the default icon identifier.
    pub fn as_str(&self) -> &str {
        match self {
            IconReference::Resolved(url) => url,
            IconReference::Default => DEFAULT_FAVICON,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, IconReference::Default)
    }
}

impl fmt::Display for IconReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IconReference> for String {
    fn from(icon: IconReference) -> Self {
        match icon {
            IconReference::Resolved(url) => url,
            IconReference::Default => DEFAULT_FAVICON.to_string(),
        }
    }
}

/// One line of CLI output in JSON mode.
#[derive(Debug, Serialize)]
pub struct SiteIcon<'a> {
    pub site: &'a str,
    pub icon: &'a str,
    pub is_default: bool,
}

impl<'a> SiteIcon<'a> {
    pub fn new(site: &'a str, icon: &'a IconReference) -> Self {
        Self {
            site,
            icon: icon.as_str(),
            is_default: icon.is_default(),
        }
    }
}
