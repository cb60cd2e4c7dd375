// src/content/discover.rs
// =============================================================================
// This module discovers article files and loads their text.
//
// Strategy:
// - Read the blog directory (top level only, or the whole tree with
//   --recursive)
// - Keep files ending in .md or .mdx
// - Sort the result so every run visits articles in the same order
//
// Rust concepts:
// - Path/PathBuf: Borrowed and owned filesystem paths
// - async functions: tokio::fs does file I/O without blocking the runtime
// - Iterators: filter_map to drop entries we don't care about
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name endings that mark a file as an article
const ARTICLE_SUFFIXES: [&str; 2] = [".md", ".mdx"];

// A single content file, read once and dropped after its links are extracted
#[derive(Debug, Clone)]
pub struct Article {
    /// Name shown in the report (file name, or path relative to the root)
    pub name: String,
    pub body: String,
}

impl Article {
    // Reads an article from disk
    //
    // Parameters:
    //   root: the article root, used to build a readable name
    //   path: the file to read
    //
    // Returns an error if the file can't be read or isn't valid UTF-8.
    // The caller decides whether that is fatal (it isn't, for the validator).
    pub async fn load(root: &Path, path: &Path) -> Result<Self> {
        let body = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read article {}", path.display()))?;

        Ok(Self {
            name: article_name(root, path),
            body,
        })
    }
}

// Finds every article under `root`
//
// Parameters:
//   root: the blog directory
//   recursive: whether to descend into subdirectories
//
// Returns: sorted list of article paths. Never fails - an unreadable root is
// logged and treated as an empty directory.
pub async fn discover_articles(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let result = if recursive {
        walk_tree(root)
    } else {
        read_top_level(root).await
    };

    match result {
        Ok(mut paths) => {
            paths.sort();
            debug!(root = %root.display(), count = paths.len(), "discovered articles");
            paths
        }
        Err(e) => {
            warn!("Error reading blog directory: {:#}", e);
            Vec::new()
        }
    }
}

// Lists articles directly inside `root`
async fn read_top_level(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(root)
        .await
        .with_context(|| format!("cannot read {}", root.display()))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("cannot list {}", root.display()))?
    {
        let path = entry.path();
        if is_article(&path) {
            paths.push(path);
        }
    }

    Ok(paths)
}

// Lists articles anywhere under `root`
//
// walkdir is synchronous, but discovery happens once before any network
// work starts, so blocking here is fine.
fn walk_tree(root: &Path) -> Result<Vec<PathBuf>> {
    // Surface a missing root as an error, like read_top_level does
    std::fs::metadata(root).with_context(|| format!("cannot read {}", root.display()))?;

    let paths = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_article(path))
        .collect();

    Ok(paths)
}

// Checks whether a file name ends in one of the article suffixes
//
// Matches on the name, not Path::extension(), so a file called just ".md"
// still counts (extension() treats it as a hidden file with no extension).
fn is_article(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| ARTICLE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

// Builds the display name of an article: its path relative to the root,
// which is just the file name for top-level articles
fn article_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Vec instead of Result from discover_articles?
//    - A missing blog directory is an expected situation, not a crash
//    - The caller just sees zero articles and prints an empty summary
//
// 2. What is with_context?
//    - An anyhow helper that wraps an error with a human-readable message
//    - The closure only runs when there actually is an error
//
// 3. Why sort?
//    - read_dir returns entries in whatever order the filesystem likes
//    - Sorting makes the report order the same on every machine
// -----------------------------------------------------------------------------
