// src/checker/extract.rs
// =============================================================================
// This module extracts raw link targets from article text.
//
// Articles are Markdown or MDX. MDX mixes Markdown with JSX, so a real
// Markdown parser would miss links written as <a href="..."> or
// <Card href="..."> components. Instead we scan the text with two patterns:
//
// - Markdown links:  [text](target)
// - href attributes: href="target" or href='target'
//
// Rust concepts:
// - Lazy statics: compile each regex once, reuse it on every call
// - HashSet: to drop duplicate targets while keeping the Vec in order
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// [text](target) - capture group 2 is the target
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("markdown link pattern is valid"));

// href="target" / href='target' - capture group 1 is the target
static HREF_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href=["']([^"']+)["']"#).expect("href pattern is valid"));

// Extracts every unique link target from an article
//
// Parameters:
//   content: the raw article text
//
// Returns: targets in first-seen order, Markdown links before href
// attributes, each literal target once
//
// Example:
//   "[Intro](/docs/intro) and <a href='https://x.dev'>x</a>"
//   -> ["/docs/intro", "https://x.dev"]
pub fn extract_links(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let markdown = MARKDOWN_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(2));
    let attributes = HREF_ATTRIBUTE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1));

    for target in markdown.chain(attributes) {
        let target = target.as_str();
        if seen.insert(target) {
            links.push(target.to_string());
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Lazy<Regex>?
//    - Compiling a regex is relatively expensive
//    - Lazy compiles it the first time it's used and shares it afterwards
//    - A Regex holds no search position, so sharing it is safe: every
//      captures_iter() call starts from the beginning of the text
//
// 2. Why both a HashSet and a Vec?
//    - HashSet answers "have we seen this?" quickly
//    - Vec remembers the order links appeared in
//    - seen.insert() returns false for duplicates, so we skip them
//
// 3. Why expect() on Regex::new?
//    - The patterns are constants; if they failed to compile that would be
//      a programmer error caught by the first test run
// -----------------------------------------------------------------------------
