// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself: one task per page, recursively.
//
// How it works (visit(url)):
// 1. Claim the url in the shared sitemap store. If someone else already did,
//    stop here: that task owns the page.
// 2. Take a permit from the admission pool, fetch the page, give the permit
//    back as soon as the response has been read.
// 3. For every href on the page: normalize it against the page URL, dedupe
//    it, and spawn visit(link) for new links that parse and are in scope.
//    Every distinct link is recorded, followed or not.
// 4. Commit the page's distinct links to the store.
// 5. Wait for every child task. Children wait for theirs, so when the root
//    visit returns the whole crawl is done.
//
// A failed fetch is a leaf: the page stays in the sitemap with no links.
//
// Rust concepts:
// - Arc: Shares the crawl state between tasks
// - JoinSet: Owns the child tasks so none can outlive the crawl
// - Semaphore: Caps how many fetches run at the same time
// - BoxFuture: Lets an async function call itself recursively
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use futures::StreamExt;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use url::Url;

use super::normalize::normalize;
use super::scope::Scope;
use super::sitemap::{Sitemap, SitemapStore};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::fetch::{HttpFetcher, PageFetcher};

/// Crawls a single website from a seed URL.
pub struct WebCrawler<F = HttpFetcher> {
    seed: String,
    scope: Scope,
    fetcher: Arc<F>,
    max_concurrent_fetches: usize,
}

impl WebCrawler<HttpFetcher> {
    /// Creates a crawler that fetches pages over HTTP.
    pub fn new(seed: &str, config: CrawlConfig) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(seed, config, fetcher)
    }
}

impl<F: PageFetcher + 'static> WebCrawler<F> {
    /// Creates a crawler that uses `fetcher` to load pages.
    ///
    /// Fails if `seed` isn't an absolute URL.
    pub fn with_fetcher(seed: &str, config: CrawlConfig, fetcher: F) -> Result<Self, CrawlError> {
        let parsed = Url::parse(seed).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        let scope = Scope::from_seed(&parsed, config.follow_subdomains);
        debug!(seed = %seed, domain = %scope.domain(), "crawl scope");

        Ok(Self {
            // Same canonical form as every discovered link, so the seed
            // isn't crawled a second time when a page links back to it
            seed: normalize(seed, &parsed),
            scope,
            fetcher: Arc::new(fetcher),
            max_concurrent_fetches: config.max_concurrent_fetches.max(1),
        })
    }

    /// The canonical form of the seed URL, which is also its sitemap key.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Runs the crawl to completion and returns the sitemap.
    ///
    /// Every call starts from an empty sitemap.
    pub async fn crawl(&self) -> Sitemap {
        let ctx = Arc::new(CrawlContext {
            fetcher: Arc::clone(&self.fetcher),
            scope: self.scope.clone(),
            sitemap: SitemapStore::new(),
            permits: Semaphore::new(self.max_concurrent_fetches),
        });

        info!(seed = %self.seed, "crawl started");
        visit(Arc::clone(&ctx), self.seed.clone()).await;

        let sitemap = ctx.sitemap.snapshot();
        info!(pages = sitemap.len(), "crawl complete");
        sitemap
    }
}

/// Crawls `seed` with an HTTP fetcher built from `config`.
///
/// Only fails when the crawl can't start: an unparseable seed or an HTTP
/// client that can't be built. Failed pages show up in the sitemap with no
/// links instead.
pub async fn crawl(seed: &str, config: CrawlConfig) -> Result<Sitemap, CrawlError> {
    let crawler = WebCrawler::new(seed, config)?;
    Ok(crawler.crawl().await)
}

// Everything the tasks of one crawl share
struct CrawlContext<F> {
    fetcher: Arc<F>,
    scope: Scope,
    sitemap: SitemapStore,
    permits: Semaphore,
}

// Crawls one page and, through its children, everything reachable from it
//
// Returns a boxed future because an async fn can't await itself directly
// (its future type would contain itself)
fn visit<F: PageFetcher + 'static>(ctx: Arc<CrawlContext<F>>, url: String) -> BoxFuture<'static, ()> {
    async move {
        if !ctx.sitemap.claim(&url) {
            debug!(url = %url, "already claimed");
            return;
        }

        let base = match Url::parse(&url) {
            Ok(base) => base,
            Err(e) => {
                // Only reachable for a link that passed scope, which parses
                warn!(url = %url, error = %e, "cannot resolve links against url");
                ctx.sitemap.commit(&url, Vec::new());
                return;
            }
        };

        let fetched = {
            // Unreachable in a normal crawl: nothing closes the pool
            let Ok(_permit) = ctx.permits.acquire().await else {
                error!(url = %url, "admission pool closed");
                ctx.sitemap.commit(&url, Vec::new());
                return;
            };

            info!(url = %url, "crawling...");
            ctx.fetcher.fetch(&url).await
        };

        let mut hrefs = match fetched {
            Ok(hrefs) => hrefs,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed");
                ctx.sitemap.commit(&url, Vec::new());
                return;
            }
        };

        let mut links = HashSet::new();
        let mut children = JoinSet::new();

        while let Some(href) = hrefs.next().await {
            let link = normalize(&href, &base);
            if links.contains(&link) {
                continue;
            }

            // Relative leftovers ("page.html") are recorded but can't be
            // crawled. Claimed links would return straight away, no need
            // for a task.
            match Url::parse(&link) {
                Ok(parsed) => {
                    if ctx.scope.contains_url(&parsed) && !ctx.sitemap.is_claimed(&link) {
                        children.spawn(visit(Arc::clone(&ctx), link.clone()));
                    }
                }
                Err(e) => debug!(url = %url, link = %link, error = %e, "not following link"),
            }

            links.insert(link);
        }

        debug!(url = %url, links = links.len(), "committing links");
        ctx.sitemap.commit(&url, links.into_iter().collect());

        while let Some(joined) = children.join_next().await {
            if let Err(e) = joined {
                error!(parent = %url, error = %e, "crawl task failed");
            }
        }
    }
    .boxed()
}
