// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The validator has no subcommands and no required arguments: running it
// with no flags checks src/content/blog against src/content/docs using the
// defaults in src/config.rs. Every flag below just overrides one default.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - PathBuf: An owned filesystem path (like String is to &str)
// =============================================================================

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{DEFAULT_BLOG_DIR, DEFAULT_DOCS_DIR, DEFAULT_TIMEOUT_MS};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "docs-link-validator",
    version,
    about = "Validates external and internal links in blog articles",
    long_about = "docs-link-validator reads every .md/.mdx article in the blog directory, \
                  checks external links over HTTP and internal links against the docs and \
                  blog content trees, and exits with status 1 if any link is broken."
)]
pub struct Cli {
    /// Directory containing the articles to validate
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BLOG_DIR)]
    pub blog_dir: PathBuf,

    /// Directory that root-relative links (e.g. /docs/intro) resolve against
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// Timeout for each HTTP probe, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// How many links of one article to check at the same time
    ///
    /// Articles are always processed one after another. The report is the
    /// same for any value; only the progress lines may interleave.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub concurrency: usize,

    /// Also look for articles in subdirectories of the blog directory
    #[arg(long)]
    pub recursive: bool,

    /// Print the final report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    ///
    /// RUST_LOG takes precedence when it is set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The validator does exactly one thing
//    - A flat struct is enough; clap still generates --help and --version
//
// 2. What is ArgAction::Count?
//    - Each -v on the command line adds one to the field
//    - -vv gives verbose = 2
//
// 3. Why default_value (a string) for paths but default_value_t for numbers?
//    - default_value is parsed just like user input would be
//    - default_value_t takes an already-typed value and needs Display
//    - PathBuf doesn't implement Display, so paths use the string form
// -----------------------------------------------------------------------------
