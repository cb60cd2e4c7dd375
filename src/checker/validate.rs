// src/checker/validate.rs
// =============================================================================
// Turns one raw link into one ValidationResult.
//
// LinkChecker owns everything a single run needs to check links:
// - the Prober for external links
// - the SiteLayout for internal links
// - the ReachabilityCache, so each external URL is fetched once per run
//
// Build a new LinkChecker for each run; the cache goes away with it.
// =============================================================================

use serde::Serialize;
use tracing::debug;

use super::cache::ReachabilityCache;
use super::classify::{classify, LinkKind};
use super::http::{probe_url, Prober};
use super::internal::SiteLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Invalid,
    Skipped,
}

// The verdict for one link in one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Article the link was found in
    pub article: String,
    /// The link exactly as written
    pub link: String,
    #[serde(flatten)]
    pub kind: LinkKind,
    pub outcome: Outcome,
}

impl ValidationResult {
    pub fn is_internal(&self) -> bool {
        self.kind == LinkKind::Internal
    }
}

pub struct LinkChecker<P> {
    prober: P,
    layout: SiteLayout,
    cache: ReachabilityCache,
}

impl<P: Prober> LinkChecker<P> {
    pub fn new(prober: P, layout: SiteLayout) -> Self {
        Self {
            prober,
            layout,
            cache: ReachabilityCache::new(),
        }
    }

    #[cfg(test)]
    pub fn prober(&self) -> &P {
        &self.prober
    }

    pub fn cache(&self) -> &ReachabilityCache {
        &self.cache
    }

    // Classifies and checks a single link
    //
    // Excluded links return straight away without any I/O.
    pub async fn check_link(&self, article: &str, link: &str) -> ValidationResult {
        let kind = classify(link);

        let outcome = match kind {
            LinkKind::Excluded(reason) => {
                debug!(%article, %link, reason = reason.describe(), "skipping link");
                Outcome::Skipped
            }
            LinkKind::External => verdict(self.check_external(link).await),
            LinkKind::Internal => verdict(self.layout.check_internal(link).await),
        };

        ValidationResult {
            article: article.to_string(),
            link: link.to_string(),
            kind,
            outcome,
        }
    }

    // Checks whether an external URL is reachable, at most once per run
    //
    // Links within one article are unique and articles are processed one
    // after another, so the same URL is never in flight twice and a plain
    // check-then-insert is enough.
    pub async fn check_external(&self, url: &str) -> bool {
        if let Some(reachable) = self.cache.get(url) {
            debug!(%url, reachable, "cache hit");
            return reachable;
        }

        let reachable = match probe_url(&self.prober, url).await {
            Ok(status) => {
                debug!(%url, status = status.as_u16(), "reachable");
                true
            }
            Err(e) => {
                debug!(%url, error = %e, "unreachable");
                false
            }
        };

        self.cache.insert(url, reachable);
        reachable
    }
}

fn verdict(valid: bool) -> Outcome {
    if valid {
        Outcome::Valid
    } else {
        Outcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::classify::SkipReason;
    use crate::checker::testing::{FakeProber, Reply};

    fn checker(prober: FakeProber) -> LinkChecker<FakeProber> {
        LinkChecker::new(prober, SiteLayout::new("/nonexistent/blog", "/nonexistent/docs"))
    }

    #[tokio::test]
    async fn test_excluded_links_make_no_requests() {
        let checker = checker(FakeProber::new());

        for link in ["mailto:hello@example.com", "tel:+15551234", "#intro"] {
            let result = checker.check_link("post.md", link).await;
            assert_eq!(result.outcome, Outcome::Skipped);
            assert_eq!(result.kind, LinkKind::Excluded(SkipReason::ProtocolOrAnchor));
        }

        let relative = checker.check_link("post.md", "other-post.md").await;
        assert_eq!(relative.kind, LinkKind::Excluded(SkipReason::Relative));
        assert_eq!(relative.outcome, Outcome::Skipped);

        assert!(checker.prober().calls().is_empty());
        assert_eq!(checker.cache().len(), 0);
    }

    #[tokio::test]
    async fn test_external_result_is_cached() {
        let url = "https://example.com/page";
        let checker = checker(FakeProber::new().respond(url, Reply::Status(200), Reply::Status(200)));

        assert!(checker.check_external(url).await);
        assert!(checker.check_external(url).await);
        assert_eq!(checker.prober().calls_for(url), 1);
    }

    #[tokio::test]
    async fn test_failures_are_cached_too() {
        let url = "https://example.com/gone";
        let checker = checker(FakeProber::new().respond(url, Reply::Status(404), Reply::Status(404)));

        let first = checker.check_link("a.md", url).await;
        let second = checker.check_link("b.md", url).await;

        assert_eq!(first.outcome, Outcome::Invalid);
        assert_eq!(second.outcome, Outcome::Invalid);
        assert_eq!(second.article, "b.md");
        // HEAD + GET for the first lookup, nothing for the second
        assert_eq!(checker.prober().calls_for(url), 2);
        assert_eq!(checker.cache().get(url), Some(false));
    }

    #[tokio::test]
    async fn test_malformed_url_is_invalid() {
        let checker = checker(FakeProber::new());
        let result = checker.check_link("a.md", "https://exa mple.com").await;

        assert_eq!(result.kind, LinkKind::External);
        assert_eq!(result.outcome, Outcome::Invalid);
        assert!(checker.prober().calls().is_empty());
    }

    #[tokio::test]
    async fn test_internal_link_never_touches_network() {
        let checker = checker(FakeProber::new());
        let result = checker.check_link("a.md", "/docs/introduction").await;

        assert!(result.is_internal());
        assert_eq!(result.outcome, Outcome::Invalid);
        assert!(checker.prober().calls().is_empty());
    }

    #[tokio::test]
    async fn test_blog_root_is_valid() {
        let checker = checker(FakeProber::new());
        let result = checker.check_link("a.md", "/blog/").await;
        assert_eq!(result.outcome, Outcome::Valid);
    }
}
