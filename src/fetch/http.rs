// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - One shared reqwest client with a client-wide timeout
// - GET the page, treat any non-2xx status as a failure
// - Read the whole body, then hand it to the HTML walker
//
// There are no retries and no distinction between failure kinds. The crawl
// engine records a failed page as a leaf with no links.
//
// Rust concepts:
// - Traits: PageFetcher lets the engine crawl fake sites in tests
// - async-trait: async methods in a trait that spawned tasks can use
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;

use super::html::HrefStream;
use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};

/// Something that can turn a URL into the raw hrefs found on that page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the hrefs of its anchors in document order.
    async fn fetch(&self, url: &str) -> Result<HrefStream, FetchError>;
}

/// The real fetcher, backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client once; every fetch of the crawl reuses it
    // (connection pooling, shared timeout)
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<HrefStream, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Reading the full body here means the response is completely
        // consumed by the time fetch() returns
        let body = response.text().await?;

        Ok(HrefStream::walk(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::time::Duration;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_fetch_yields_page_hrefs() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string(r##"<a href="/one">1</a><a href="#skip">s</a><a href="/two">2</a>"##),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(&CrawlConfig::default()).unwrap();
        let hrefs: Vec<String> = fetcher
            .fetch(&mock_server.uri())
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(hrefs, vec!["/one", "/two"]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"<a href="/x">x</a>"#))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(&CrawlConfig::default()).unwrap();
        let result = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await;

        match result {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let config = CrawlConfig::default().with_timeout(Duration::from_millis(100));
        let fetcher = HttpFetcher::new(&config).unwrap();
        let result = fetcher.fetch(&mock_server.uri()).await;

        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn test_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = CrawlConfig::default().with_user_agent("test-agent/1.0");
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert!(fetcher.fetch(&mock_server.uri()).await.is_ok());
    }
}
