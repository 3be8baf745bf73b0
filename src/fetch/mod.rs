// src/fetch/mod.rs
// =============================================================================
// This module turns a URL into the raw hrefs found on that page.
//
// Submodules:
// - http: Makes the HTTP request (PageFetcher trait + reqwest implementation)
// - html: Walks the parsed HTML and streams anchor hrefs
// =============================================================================

mod html;
mod http;

pub use html::{hrefs, HrefStream};
pub use http::{HttpFetcher, PageFetcher};
