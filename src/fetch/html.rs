// src/fetch/html.rs
// =============================================================================
// This module extracts raw hrefs from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree (built on html5ever, Mozilla's HTML parser)
// - Lets us walk every node of that tree in document order
//
// Extraction rules:
// - Only <a> elements count
// - Only the first href attribute of an anchor is used (html5ever already
//   drops repeated attributes, keeping the first one)
// - Whitespace around the value is trimmed
// - Empty hrefs and pure fragments (#section) are skipped
//
// The hrefs are NOT resolved here. They come out exactly as written in the
// page and the crawl engine normalizes them against the page URL.
//
// Rust concepts:
// - Iterators: A lazy depth-first walk over the tree
// - Channels: A producer thread feeding hrefs to an async consumer
// - Streams: The async version of an iterator
// =============================================================================

use futures::Stream;
use scraper::Html;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

// How many hrefs the walker may get ahead of the consumer
const HREF_BUFFER: usize = 64;

// Walks the whole document depth-first and yields each anchor's href
//
// Parameters:
//   document: the parsed HTML page
//
// Returns: a lazy iterator of trimmed, non-fragment href values
//
// Example:
//   <a href=" /docs ">Docs</a><a href="#top">Top</a>
//   result = ["/docs"]
pub fn hrefs(document: &Html) -> impl Iterator<Item = String> + '_ {
    document.tree.root().descendants().filter_map(|node| {
        let element = node.value().as_element()?;
        if element.name() != "a" {
            return None;
        }

        let href = element.attr("href")?.trim();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }

        Some(href.to_string())
    })
}

/// A finite, non-restartable sequence of raw hrefs found on one page.
///
/// The sequence ends once the page has been walked completely.
#[derive(Debug)]
pub struct HrefStream {
    rx: mpsc::Receiver<String>,
}

impl HrefStream {
    /// Parses `body` on the blocking pool and streams its hrefs as the tree
    /// walk finds them.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn walk(body: String) -> Self {
        let (tx, rx) = mpsc::channel(HREF_BUFFER);

        // scraper's Html is not Send, so parsing and walking both happen on
        // the blocking thread. Dropping `tx` at the end closes the stream.
        tokio::task::spawn_blocking(move || {
            let document = Html::parse_document(&body);
            for href in hrefs(&document) {
                if tx.blocking_send(href).is_err() {
                    // Consumer went away, nobody wants the rest
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Builds an already-complete stream from a list of hrefs.
    pub fn from_hrefs<I>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let hrefs: Vec<String> = hrefs.into_iter().collect();
        let (tx, rx) = mpsc::channel(hrefs.len().max(1));
        for href in hrefs {
            // Capacity covers every item, so this cannot fail
            let _ = tx.try_send(href);
        }
        Self { rx }
    }
}

impl Stream for HrefStream {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a channel instead of returning a Vec?
//    - The crawl engine can start normalizing and spawning child crawls for
//      the first links while the rest of the page is still being walked
//    - A bounded channel (HREF_BUFFER) keeps memory flat on huge pages
//
// 2. What is spawn_blocking?
//    - Runs a closure on a thread pool meant for CPU-heavy or blocking work
//    - HTML parsing is pure CPU work, so it shouldn't sit on an async worker
//    - blocking_send() is the non-async way to push into a tokio channel
//
// 3. What is filter_map?
//    - Combines filter and map: return Some(x) to keep x, None to skip
//    - The ? operator works inside the closure because it returns Option
//
// 4. Why implement Stream?
//    - Stream is to async what Iterator is to sync code
//    - Callers can use StreamExt::next() or .collect() on it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn extract(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        hrefs(&document).collect()
    }

    #[test]
    fn test_extract_in_document_order() {
        let html = r#"
            <a href="/first">1</a>
            <div><p><a href="https://example.com/second">2</a></p></div>
            <a href="../third">3</a>
        "#;
        assert_eq!(
            extract(html),
            vec!["/first", "https://example.com/second", "../third"]
        );
    }

    #[test]
    fn test_skip_fragments_and_empty() {
        let html = r##"
            <a href="#top">Top</a>
            <a href="   ">Blank</a>
            <a href="">Empty</a>
            <a>No href</a>
            <a href="/kept">Kept</a>
        "##;
        assert_eq!(extract(html), vec!["/kept"]);
    }

    #[test]
    fn test_trims_whitespace() {
        let html = "<a href=\"\n   /docs  \t\">Docs</a>";
        assert_eq!(extract(html), vec!["/docs"]);
    }

    #[test]
    fn test_first_href_wins() {
        let html = r#"<a href="/one" href="/two">Twice</a>"#;
        assert_eq!(extract(html), vec!["/one"]);
    }

    #[test]
    fn test_only_anchor_elements() {
        let html = r#"
            <link href="/style.css" rel="stylesheet">
            <area href="/map">
            <img src="/logo.png">
            <A HREF="/upper">Upper</A>
        "#;
        assert_eq!(extract(html), vec!["/upper"]);
    }

    #[test]
    fn test_unclosed_anchors_are_all_found() {
        let html = r#"<a href="/"><a href="/about"><a href="/contact">"#;
        assert_eq!(extract(html), vec!["/", "/about", "/contact"]);
    }

    #[tokio::test]
    async fn test_walk_streams_every_href() {
        let body = r##"<a href="/a">A</a><a href="#x">X</a><a href="/b">B</a>"##.to_string();
        let found: Vec<String> = HrefStream::walk(body).collect().await;
        assert_eq!(found, vec!["/a", "/b"]);
    }

    #[tokio::test]
    async fn test_walk_on_non_html_body_is_empty() {
        let found: Vec<String> = HrefStream::walk("just some text".to_string())
            .collect()
            .await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_walk_handles_more_hrefs_than_buffer() {
        let body: String = (0..HREF_BUFFER * 3)
            .map(|i| format!(r#"<a href="/page{}">p</a>"#, i))
            .collect();
        let found: Vec<String> = HrefStream::walk(body).collect().await;
        assert_eq!(found.len(), HREF_BUFFER * 3);
        assert_eq!(found[0], "/page0");
    }

    #[tokio::test]
    async fn test_from_hrefs() {
        let stream = HrefStream::from_hrefs(vec!["/a".to_string(), "/b".to_string()]);
        let found: Vec<String> = stream.collect().await;
        assert_eq!(found, vec!["/a", "/b"]);

        let empty: Vec<String> = HrefStream::from_hrefs(Vec::new()).collect().await;
        assert!(empty.is_empty());
    }
}
