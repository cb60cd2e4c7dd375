// src/content/mod.rs
// =============================================================================
// This module finds and reads the articles we validate.
//
// Currently implements:
// - Listing .md/.mdx files in the blog directory (optionally recursive)
// - Reading each article as UTF-8 text
//
// Both steps fail softly: a missing directory means "no articles", and an
// unreadable article is reported and skipped so the others still get checked.
// =============================================================================

mod discover;

// Re-export the public API
pub use discover::{discover_articles, Article};
