// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostic logging
// 3. Run one validation pass over the blog
// 4. Print the report
// 5. Exit with proper code (0 = all links valid, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - async/await: Network and file I/O run on the tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker;   // src/checker/ - link extraction and checking
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - defaults and runtime settings
mod content;   // src/content/ - finding and reading articles
mod logging;   // src/logging.rs - tracing setup
mod report;    // src/report.rs - result buckets and the summary
mod validator; // src/validator.rs - the run itself

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use tracing::debug;

use checker::HttpProber;
use cli::Cli;
use config::ValidatorConfig;
use validator::Validator;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = something went wrong that isn't a broken link
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = ValidatorConfig::from(&cli);
    debug!(?config, "starting validation");

    // With --json, stdout carries only the JSON document
    let progress = !cli.json;
    if progress {
        println!("🔍 Blog Link Validator\n");
        println!("================================");
    }

    let prober = HttpProber::new(&config).context("failed to build HTTP client")?;
    let report = Validator::new(config, prober)
        .with_progress(progress)
        .run()
        .await;

    report::print_report(&report, cli.json)?;

    Ok(report.exit_code())
}
