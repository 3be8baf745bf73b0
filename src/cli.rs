// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes (the #[...] things).
//
// Usage:
//   site-mapper [--subdomains] [-v] [-n <N>] [--timeout <SECS>] <URL>
// =============================================================================

use clap::Parser;
use site_mapper::CrawlConfig;
use std::time::Duration;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website and print its sitemap as JSON",
    long_about = "site-mapper crawls every page of a website reachable from the given URL \
                  and prints a JSON object mapping each visited page to the links found on it."
)]
pub struct Cli {
    /// Website URL to crawl (e.g., https://monzo.com)
    ///
    /// This is a positional argument (required)
    pub url: String,

    /// Also crawl subdomains of the site (blog.example.com for example.com)
    #[arg(long)]
    pub subdomains: bool,

    /// Log the crawler progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of concurrent HTTP calls
    ///
    /// #[arg(value_parser = ...)] rejects 0 before we ever start crawling
    #[arg(
        short = 'n',
        long = "concurrency",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub concurrency: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,
}

impl Cli {
    /// Turns the parsed flags into the library's crawl configuration.
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::default()
            .with_follow_subdomains(self.subdomains)
            .with_max_concurrent_fetches(self.concurrency as usize)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}
