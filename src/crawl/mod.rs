// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a website into a sitemap.
//
// Features:
// - Recursive, concurrent crawling: one task per discovered page
// - Each page is fetched at most once per crawl, even on cyclic sites
// - Only pages on the seed's domain are crawled; other links are recorded
// - A fixed-size admission pool caps simultaneous fetches
//
// Submodules:
// - normalize: raw href -> canonical URL string
// - scope: which URLs belong to the site
// - sitemap: the shared store and the finished Sitemap
// - engine: the crawl itself
// =============================================================================

mod engine;
mod normalize;
mod scope;
mod sitemap;

// Re-export the public crawling API
pub use engine::{crawl, WebCrawler};
pub use normalize::normalize;
pub use scope::{registrable_domain, Scope};
pub use sitemap::{Sitemap, SitemapStore};
