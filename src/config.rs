// src/config.rs
// =============================================================================
// Runtime configuration for one validation run.
//
// Everything has a compiled-in default, so the validator runs with no
// arguments from the root of the site project. The CLI (src/cli.rs) only
// overrides these defaults; the rest of the crate sees ValidatorConfig.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Where articles live (and where `/blog/...` links resolve).
pub const DEFAULT_BLOG_DIR: &str = "src/content/blog";

/// Where `/docs/...` and every other root-relative link resolves.
pub const DEFAULT_DOCS_DIR: &str = "src/content/docs";

/// Per-probe timeout budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Identifier sent with every outbound probe
pub const USER_AGENT: &str = concat!("docs-link-validator/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub blog_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub timeout: Duration,
    /// How many links of a single article may be checked at once
    pub concurrency: usize,
    /// Walk subdirectories of `blog_dir` instead of just its top level
    pub recursive: bool,
    pub user_agent: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            blog_dir: PathBuf::from(DEFAULT_BLOG_DIR),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            concurrency: 1,
            recursive: false,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl From<&Cli> for ValidatorConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            blog_dir: cli.blog_dir.clone(),
            docs_dir: cli.docs_dir.clone(),
            timeout: Duration::from_millis(cli.timeout_ms),
            // A concurrency of 0 would never make progress
            concurrency: cli.concurrency.max(1),
            recursive: cli.recursive,
            ..Self::default()
        }
    }
}
