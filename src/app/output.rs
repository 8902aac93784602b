//! Result formatting for the CLI.

use crate::config::OutputFormat;
use crate::models::{IconReference, SiteIcon};

/// Formats one resolution result as a single output line (no newline).
pub fn format_result(site: &str, icon: &IconReference, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format!("{}\t{}", site, icon),
        OutputFormat::Json => serde_json::to_string(&SiteIcon::new(site, icon))
            .unwrap_or_else(|e| {
                log::error!("Failed to serialize result for {}: {}", site, e);
                String::from("{}")
            }),
    }
}
