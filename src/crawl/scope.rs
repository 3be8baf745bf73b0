// src/crawl/scope.rs
// =============================================================================
// Decides which discovered URLs belong to the site being crawled.
//
// The registrable domain is worked out once from the seed URL by keeping the
// last two dot-separated labels of its host:
//   blog.monzo.com -> monzo.com
//   localhost      -> localhost
//
// Known limitation: multi-label public suffixes come out wrong
// (www.bbc.co.uk -> co.uk). IP addresses are used whole.
//
// A URL is in scope when:
// - it parses, and its scheme is http or https
// - its host equals the domain (case-insensitive), or, with subdomain
//   following on, ends with "." + domain
//
// The scheme check is stricter than a host-only rule: ftp://monzo.com/file is
// on the right host but is recorded and never fetched.
//
// Ports are ignored. robots.txt is not consulted.
// =============================================================================

use url::{Host, Url};

/// The in-scope predicate for one crawl.
#[derive(Debug, Clone)]
pub struct Scope {
    domain: String,
    follow_subdomains: bool,
}

impl Scope {
    pub fn new(domain: impl Into<String>, follow_subdomains: bool) -> Self {
        Self {
            domain: domain.into().to_ascii_lowercase(),
            follow_subdomains,
        }
    }

    /// Derives the scope domain from the seed URL.
    ///
    /// A seed without a host gets an empty domain, which nothing matches.
    pub fn from_seed(seed: &Url, follow_subdomains: bool) -> Self {
        let domain = seed.host().map(registrable_domain).unwrap_or_default();
        Self::new(domain, follow_subdomains)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns false for anything that doesn't parse as an absolute URL.
    pub fn contains(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.contains_url(&parsed),
            Err(_) => false,
        }
    }

    pub fn contains_url(&self, url: &Url) -> bool {
        if self.domain.is_empty() || !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        let host = match url.host_str() {
            Some(host) => host.to_ascii_lowercase(),
            None => return false,
        };

        if host == self.domain {
            return true;
        }

        self.follow_subdomains
            && host
                .strip_suffix(self.domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

/// The last two labels of a domain host, or the whole host if it has fewer.
pub fn registrable_domain(host: Host<&str>) -> String {
    match host {
        Host::Domain(domain) => {
            let domain = domain.to_ascii_lowercase();
            let labels: Vec<&str> = domain.split('.').collect();
            if labels.len() <= 2 {
                domain
            } else {
                labels[labels.len() - 2..].join(".")
            }
        }
        // Host's Display brackets IPv6, matching Url::host_str()
        ip => ip.to_string(),
    }
}
