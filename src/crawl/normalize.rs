// src/crawl/normalize.rs
// =============================================================================
// Turns a raw href into a canonical URL string.
//
// The canonical string is the identity of a page: two hrefs that normalize to
// the same string are the same page, and sitemap keys are canonical strings.
//
// Rules, in order:
// 1. Strip one trailing '/'
// 2. Nothing left  -> the base's origin ("https://host")
// 3. "//host/path" -> scheme-relative, prefix the base's scheme
// 4. "/path" or "../path" -> the base's origin + the path
// 5. Anything else is taken as already absolute and returned as is
//
// This is a best-effort resolver. "../x" becomes "https://host/../x"; the ".."
// segment is NOT collapsed against the base path. Hrefs relative to the
// current directory ("page.html") fall through rule 5 unchanged. The engine
// still records them but never crawls them, since they don't parse as
// absolute URLs.
// =============================================================================

use url::{Position, Url};

/// Normalizes `href` against `base`, the URL of the page it was found on.
pub fn normalize(href: &str, base: &Url) -> String {
    let href = href.strip_suffix('/').unwrap_or(href);

    if href.is_empty() {
        return origin(base).to_string();
    }

    if href.starts_with("//") {
        return format!("{}:{}", base.scheme(), href);
    }

    if href.starts_with('/') {
        return format!("{}{}", origin(base), href);
    }

    if href.starts_with("..") {
        return format!("{}/{}", origin(base), href);
    }

    href.to_string()
}

// Scheme, credentials, host and port, without a trailing slash:
// "https://monzo.com/path?query#frag" -> "https://monzo.com"
fn origin(base: &Url) -> &str {
    &base[..Position::BeforePath]
}
