// src/config.rs
// =============================================================================
// Crawl configuration.
//
// One plain struct with sensible defaults. The CLI fills it from flags; tests
// build it with the with_* methods.
// =============================================================================

use std::time::Duration;

/// Default request timeout for every page fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of pages fetched at the same time.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 5;

/// Settings for a single crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Also crawl subdomains of the seed's registrable domain
    pub follow_subdomains: bool,
    /// Capacity of the admission pool gating outbound fetches (at least 1)
    pub max_concurrent_fetches: usize,
    /// Client-wide request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            follow_subdomains: false,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("site-mapper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn with_follow_subdomains(mut self, follow: bool) -> Self {
        self.follow_subdomains = follow;
        self
    }

    /// A zero capacity would block every fetch forever, so it is raised to 1.
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
