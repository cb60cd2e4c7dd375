// src/validator.rs
// =============================================================================
// This module runs one validation pass over the blog.
//
// How it works:
// 1. Discovering: list the article files
// 2. Validating: for each article, extract its links and check them
// 3. Reporting: hand the filled-in Report back to main
//
// Nothing in step 2 stops the run: an unreadable article is skipped with a
// warning, and a broken link is just an entry in the report.
//
// Rust concepts:
// - Generics: Validator<P> works with any Prober (real HTTP or a test fake)
// - Streams: buffered() checks several links at once but keeps their order
// =============================================================================

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::checker::{
    extract_links, LinkChecker, LinkKind, Outcome, Prober, SiteLayout, ValidationResult,
};
use crate::config::ValidatorConfig;
use crate::content::{discover_articles, Article};
use crate::report::Report;

/// External links longer than this are shortened in progress lines
const DISPLAY_WIDTH: usize = 60;

pub struct Validator<P> {
    config: ValidatorConfig,
    checker: LinkChecker<P>,
    /// Print per-article and per-link progress lines
    progress: bool,
}

impl<P: Prober> Validator<P> {
    pub fn new(config: ValidatorConfig, prober: P) -> Self {
        let layout = SiteLayout::new(&config.blog_dir, &config.docs_dir);
        Self {
            checker: LinkChecker::new(prober, layout),
            config,
            progress: true,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    #[cfg(test)]
    pub fn checker(&self) -> &LinkChecker<P> {
        &self.checker
    }

    // Runs discovery and validation and returns the finished report
    pub async fn run(&self) -> Report {
        let mut report = Report::default();

        let paths = discover_articles(&self.config.blog_dir, self.config.recursive).await;
        if paths.is_empty() {
            self.say(format!(
                "No blog posts found in {}",
                self.config.blog_dir.display()
            ));
            return report;
        }
        self.say(format!("Found {} blog post(s)", paths.len()));

        for path in &paths {
            let article = match Article::load(&self.config.blog_dir, path).await {
                Ok(article) => article,
                Err(e) => {
                    warn!("Skipping article: {:#}", e);
                    continue;
                }
            };

            for result in self.validate_article(&article).await {
                report.record(result);
            }
        }

        info!(
            unique_urls = self.checker.cache().len(),
            "validation finished"
        );
        report
    }

    // Checks every link of one article, in extraction order
    async fn validate_article(&self, article: &Article) -> Vec<ValidationResult> {
        let links = extract_links(&article.body);
        self.say(format!("\n📄 {} ({} links)", article.name, links.len()));

        stream::iter(&links)
            .map(|link| self.checker.check_link(&article.name, link))
            .buffered(self.config.concurrency.max(1))
            .inspect(|result| self.narrate(result))
            .collect::<Vec<_>>()
            .await
    }

    // One progress line per checked external link and per missing internal one
    fn narrate(&self, result: &ValidationResult) {
        match (result.kind, result.outcome) {
            (LinkKind::External, outcome) => {
                let mark = if outcome == Outcome::Valid { "✅" } else { "❌" };
                self.say(format!("  🔗 {} {}", shorten(&result.link), mark));
            }
            (LinkKind::Internal, Outcome::Invalid) => {
                self.say(format!("  📁 {} ❌ (internal link not found)", result.link));
            }
            _ => {}
        }
    }

    fn say(&self, line: String) {
        if self.progress {
            println!("{}", line);
        }
    }
}

// Cuts a link down to DISPLAY_WIDTH characters, marking the cut with "..."
fn shorten(link: &str) -> String {
    if link.chars().count() > DISPLAY_WIDTH {
        let head: String = link.chars().take(DISPLAY_WIDTH).collect();
        format!("{}...", head)
    } else {
        link.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffered() and not buffer_unordered()?
//    - buffer_unordered yields results as they finish, in any order
//    - buffered runs the same number of futures at once but yields results
//      in the order they were started
//    - That keeps the report order identical to a one-at-a-time run
//
// 2. Why does the closure in map() return a future without awaiting it?
//    - check_link is async, so calling it just builds a future
//    - buffered() decides when to poll those futures
//
// 3. Why chars() instead of slicing with [..60]?
//    - String slices index bytes; cutting in the middle of a multi-byte
//      character would panic
// -----------------------------------------------------------------------------
