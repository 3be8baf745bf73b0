// src/lib.rs
// =============================================================================
// site-mapper crawls a single website from a seed URL and produces a sitemap:
// every visited page mapped to the distinct URLs it links to.
//
// Modules:
// - config: crawl settings (subdomains, concurrency, timeout, user agent)
// - error: typed errors for the crawl and for single fetches
// - fetch: HTTP GET + HTML walk producing raw hrefs
// - crawl: normalization, scoping, the shared sitemap and the crawl engine
//
// Example:
//   let sitemap = site_mapper::crawl("https://monzo.com", CrawlConfig::default()).await?;
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;

pub use config::CrawlConfig;
pub use crawl::{crawl, Sitemap, WebCrawler};
pub use error::{CrawlError, FetchError};
