// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - extract: Pulls link targets out of article text
// - classify: Decides whether a link is external, internal or skipped
// - http: Probes external links over HTTP (HEAD, then GET)
// - internal: Resolves root-relative links to content files
// - cache: Remembers external results for the rest of the run
// - validate: LinkChecker, which ties the pieces together
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod cache;
pub(crate) mod classify;
mod extract;
mod http;
mod internal;
mod validate;

#[cfg(test)]
pub mod testing;

// Re-export public items from submodules
// This lets users write `checker::extract_links()` instead of
// `checker::extract::extract_links()`
pub use classify::LinkKind;
pub use extract::extract_links;
pub use http::{HttpProber, Prober};
pub use internal::SiteLayout;
pub use validate::{LinkChecker, Outcome, ValidationResult};
