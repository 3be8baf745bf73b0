// src/crawl/sitemap.rs
// =============================================================================
// The shared sitemap store and the finished Sitemap it produces.
//
// The store's keys double as the "visited" set:
// - claim() inserts a page with an empty placeholder list; whoever inserts
//   first owns the crawl of that page
// - commit() overwrites the placeholder with the page's real links
//
// The lock is only held for the map operation itself, never across a fetch
// or an HTML walk.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutex-guarded map shared by every task of one crawl.
#[derive(Debug, Default)]
pub struct SitemapStore {
    entries: Mutex<HashMap<String, Vec<String>>>,
}

impl SitemapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically checks for `url` and inserts it with an empty link list.
    ///
    /// Returns true only for the single caller that inserted it.
    pub fn claim(&self, url: &str) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(url) {
            return false;
        }
        entries.insert(url.to_string(), Vec::new());
        true
    }

    pub fn is_claimed(&self, url: &str) -> bool {
        self.lock().contains_key(url)
    }

    /// Replaces whatever is stored for `url` with `links`.
    pub fn commit(&self, url: &str, mut links: Vec<String>) {
        // Sorted outside the lock
        links.sort_unstable();
        self.lock().insert(url.to_string(), links);
    }

    /// Copies the current contents into a Sitemap.
    pub fn snapshot(&self) -> Sitemap {
        self.lock()
            .iter()
            .map(|(url, links)| (url.clone(), links.clone()))
            .collect()
    }

    // A panic in another task can't leave the map half-written (every
    // critical section is a single insert), so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The result of a crawl: every visited page and the distinct links on it.
///
/// Keys are sorted; each link list is sorted too, though only its contents
/// carry meaning. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sitemap(BTreeMap<String, Vec<String>>);

impl Sitemap {
    /// The links found on `url`, or None if it was never visited.
    pub fn links(&self, url: &str) -> Option<&[String]> {
        self.0.get(url).map(Vec::as_slice)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.0.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every visited page, in sorted order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(url, links)| (url.as_str(), links.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl FromIterator<(String, Vec<String>)> for Sitemap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
