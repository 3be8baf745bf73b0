// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (quiet by default, progress with -v)
// 3. Crawl the website
// 4. Print the sitemap as pretty JSON on stdout
// 5. Exit with proper code (0 = success, 1 = bad arguments or crawl failure)
//
// stdout only ever carries the JSON (or the failure message), logs go to
// stderr so the output can be piped straight into another tool.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = sitemap printed
//   Ok(1) = bad arguments, or the crawl could not start
//   Err   = unexpected error (e.g. JSON serialization)
async fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            e.print()?;
            return Ok(1);
        }
    };

    init_logging(cli.verbose);

    let sitemap = match site_mapper::crawl(&cli.url, cli.crawl_config()).await {
        Ok(sitemap) => sitemap,
        Err(e) => {
            println!("Unable to crawl {}: {}", cli.url, e);
            return Ok(1);
        }
    };

    let json_output = serde_json::to_string_pretty(&sitemap)?;
    println!("{}", json_output);

    Ok(0)
}

// Logs go to stderr. -v shows the crawl progress, RUST_LOG overrides both
fn init_logging(verbose: bool) {
    let default_level = if verbose { "site_mapper=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
