//! Site input collection and normalization.

use anyhow::{Context, Result};

use crate::config::Config;

/// Prefixes `https://` when the input has no scheme.
///
/// `github.com` becomes `https://github.com`; anything that already carries
/// a scheme is left untouched so that the resolver can report it if it is
/// unusable.
pub fn normalize_site(site: &str) -> String {
    let site = site.trim();
    if site.contains("://") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

fn parse_site_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Collects the sites to resolve: positional arguments first, then the
/// lines of `--file` (blank lines and `#` comments skipped).
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
pub async fn collect_sites(config: &Config) -> Result<Vec<String>> {
    let mut sites: Vec<String> = config
        .sites
        .iter()
        .map(|site| normalize_site(site))
        .collect();

    if let Some(path) = &config.file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read sites file {}", path.display()))?;
        sites.extend(parse_site_lines(&content).map(normalize_site));
    }

    Ok(sites)
}
