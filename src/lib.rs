//! favicon_resolver library: best-effort site icon resolution
//!
//! Given a site URL, the resolver fetches the site's root page once and
//! probes four icon sources concurrently (apple-touch-icon, shortcut icon,
//! icon links, and `/favicon.ico`), returning the first one that validates
//! in that priority order. Resolution never fails: when nothing validates,
//! or the site is unreachable, the default icon identifier is returned and
//! the failure is reported to a [`DiagnosticsSink`].
//!
//! # Example
//!
//! ```no_run
//! use favicon_resolver::{FaviconResolver, IconReference};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = FaviconResolver::new()?;
//! match resolver.resolve_str("https://www.github.com").await {
//!     IconReference::Resolved(url) => println!("icon at {}", url),
//!     IconReference::Default => println!("no icon, using the default"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime: probes run as spawned tasks.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, DEFAULT_FAVICON};
pub use diagnostics::{DiagnosticContext, DiagnosticsSink, LogSink};
pub use domain::{base_url, root_domain};
pub use error_handling::{ProbeStats, ResolutionOutcome, ResolveError};
pub use fetch::{is_url_valid, resolve_favicon, FaviconResolver};
pub use models::{IconKind, IconReference};
pub use parse::{extract_icon_href, extract_icon_links, IconLinks};
