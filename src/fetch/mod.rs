//! Favicon resolution.
//!
//! [`FaviconResolver`] fetches a site's root page once, then runs four icon
//! probes concurrently and picks the first success in a fixed priority
//! order:
//!
//! 1. `<link rel="apple-touch-icon">`
//! 2. `<link rel="shortcut icon">`
//! 3. `<link rel="icon">`
//! 4. `/favicon.ico`
//!
//! Results are selected by priority, not by completion: a slow
//! apple-touch-icon probe delays the answer even if `/favicon.ico` already
//! validated. Every failure ends in [`IconReference::Default`].

mod favicon;

use std::sync::Arc;

use strum::IntoEnumIterator;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::{CONTEXT_KEY_BASE_URL, CONTEXT_KEY_SITE};
use crate::diagnostics::{DiagnosticContext, DiagnosticsSink, LogSink};
use crate::domain::base_url;
use crate::error_handling::{
    InitializationError, ProbeError, ProbeStats, ResolutionOutcome, ResolveError,
};
use crate::initialization::shared_client;
use crate::models::{IconKind, IconReference};
use crate::parse::{extract_icon_links, IconLinks};

pub use favicon::is_url_valid;
use favicon::{favicon_ico_url, resolve_icon_href, run_probe};

/// Resolves the best available icon for a site.
///
/// Cheap to clone; clones share the HTTP client, the diagnostics sink and
/// the statistics.
#[derive(Clone)]
pub struct FaviconResolver {
    client: Arc<reqwest::Client>,
    sink: Arc<dyn DiagnosticsSink>,
    stats: Arc<ProbeStats>,
}

impl FaviconResolver {
    /// Creates a resolver on the process-wide shared client, reporting to
    /// the log.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the shared client
    /// cannot be built.
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self::with_client(shared_client()?))
    }

    /// Creates a resolver on a caller-provided client, reporting to the log.
    pub fn with_client(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            sink: Arc::new(LogSink),
            stats: Arc::new(ProbeStats::new()),
        }
    }

    /// Replaces the diagnostics sink top-level failures are reported to.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Statistics of every resolution run through this resolver (and its clones).
    pub fn stats(&self) -> &Arc<ProbeStats> {
        &self.stats
    }

    /// Resolves the icon for `site`.
    ///
    /// Never fails: top-level failures are reported to the diagnostics sink
    /// with `baseUrl` and `site` context and yield the default icon.
    pub async fn resolve(&self, site: &Url) -> IconReference {
        let base_url = match base_url(site) {
            Ok(base_url) => base_url,
            Err(e) => {
                return self.report_failure(e.into(), &scheme_only_base(site), site.as_str())
            }
        };

        match self.try_resolve(&base_url).await {
            Ok(icon) => icon,
            Err(e) => self.report_failure(e.into(), &base_url, site.as_str()),
        }
    }

    /// Parses `site` and resolves its icon.
    ///
    /// Input that is not an absolute URL is a reported failure and yields
    /// the default icon.
    pub async fn resolve_str(&self, site: &str) -> IconReference {
        let site = site.trim();
        match Url::parse(site) {
            Ok(url) => self.resolve(&url).await,
            Err(e) => {
                let error =
                    anyhow::Error::new(e).context(ResolveError::InvalidSite(site.to_string()));
                self.report_failure(error, "", site)
            }
        }
    }

    async fn try_resolve(&self, base_url: &str) -> Result<IconReference, ResolveError> {
        let response = self
            .client
            .get(base_url)
            .send()
            .await
            .map_err(|source| ResolveError::RootPageFetch {
                base_url: base_url.to_string(),
                source,
            })?;

        // Error pages can still carry icon links; only transport errors are fatal
        if !response.status().is_success() {
            log::debug!(
                "Root page {} returned {}, scanning it anyway",
                base_url,
                response.status()
            );
        }

        let html = response
            .text()
            .await
            .map_err(|source| ResolveError::RootPageBody {
                base_url: base_url.to_string(),
                source,
            })?;

        let links = extract_icon_links(&html);
        log::debug!("Found {} icon link(s) on {}", links.len(), base_url);

        let probes = self.spawn_probes(&links, base_url);
        Ok(self.select_by_priority(base_url, probes).await)
    }

    /// Starts one task per `IconKind`, returned in priority order.
    fn spawn_probes(
        &self,
        links: &IconLinks,
        base_url: &str,
    ) -> Vec<(IconKind, JoinHandle<Option<String>>)> {
        IconKind::iter()
            .map(|kind| {
                let candidate = match kind {
                    IconKind::FaviconIco => Some(favicon_ico_url(base_url)),
                    _ => links
                        .get(kind)
                        .map(|href| resolve_icon_href(href, base_url)),
                };
                let handle = tokio::spawn(run_probe(Arc::clone(&self.client), kind, candidate));
                (kind, handle)
            })
            .collect()
    }

    async fn select_by_priority(
        &self,
        base_url: &str,
        probes: Vec<(IconKind, JoinHandle<Option<String>>)>,
    ) -> IconReference {
        let mut pending = probes.into_iter();

        while let Some((kind, handle)) = pending.next() {
            match handle.await {
                Ok(Some(url)) => {
                    for (_, lower_priority) in pending.by_ref() {
                        lower_priority.abort();
                    }
                    log::info!("Resolved {} icon for {}: {}", kind, base_url, url);
                    self.stats.record_winner(kind);
                    return IconReference::Resolved(url);
                }
                Ok(None) => {}
                Err(e) => log::debug!("{} probe: {}", kind, ProbeError::from(e)),
            }
        }

        log::debug!("No icon candidate validated for {}", base_url);
        self.stats.record_outcome(ResolutionOutcome::Default);
        IconReference::Default
    }

    fn report_failure(&self, error: anyhow::Error, base_url: &str, site: &str) -> IconReference {
        let context = failure_context(base_url, site);
        self.sink.report(&error, &context);
        self.stats.record_outcome(ResolutionOutcome::Reported);
        IconReference::Default
    }
}

/// Base URL reported for sites without a host: just `scheme://`.
fn scheme_only_base(site: &Url) -> String {
    format!("{}://", site.scheme())
}

fn failure_context(base_url: &str, site: &str) -> DiagnosticContext {
    let mut context = DiagnosticContext::new();
    context.insert(CONTEXT_KEY_BASE_URL, base_url.to_string());
    context.insert(CONTEXT_KEY_SITE, site.to_string());
    context
}

/// Resolves the icon for `site` on the shared client, reporting failures to
/// the log.
///
/// # Example
///
/// ```no_run
/// use favicon_resolver::resolve_favicon;
/// use url::Url;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let site = Url::parse("https://www.rust-lang.org")?;
/// let icon = resolve_favicon(&site).await;
/// println!("{}", icon);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_favicon(site: &Url) -> IconReference {
    match FaviconResolver::new() {
        Ok(resolver) => resolver.resolve(site).await,
        Err(e) => {
            let error = anyhow::Error::new(ResolveError::ClientUnavailable(e));
            let base_url = base_url(site).unwrap_or_else(|_| scheme_only_base(site));
            LogSink.report(&error, &failure_context(&base_url, site.as_str()));
            IconReference::Default
        }
    }
}
