// src/error.rs
// =============================================================================
// Error types for the crawl engine.
//
// Two families:
// - CrawlError: stops a crawl before it starts (bad seed URL, broken client)
// - FetchError: a single page could not be fetched; the crawl carries on and
//   records that page with an empty link list
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that prevent a crawl from running at all.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors from fetching a single page.
///
/// The engine never retries and never distinguishes between these: any of
/// them turns the page into a leaf.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_seed_message_names_the_url() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = CrawlError::InvalidSeed {
            url: "not a url".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("invalid seed URL 'not a url'"));
    }

    #[test]
    fn test_status_message() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }
}
