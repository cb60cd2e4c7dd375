// src/checker/internal.rs
// =============================================================================
// This module checks root-relative links like /docs/introduction against
// the content files on disk.
//
// How a link maps to files:
//   /docs/introduction    -> docs/introduction.mdx, docs/introduction.md,
//                            docs/introduction/index.mdx, .../index.md
//   /blog, /blog/         -> always valid (the blog index page)
//   /blog/my-post#section -> blog/my-post.mdx, blog/my-post.md
//
// Resolution is split from the disk check: `resolve` is a pure function,
// `check_internal` just asks whether any candidate exists.
// =============================================================================

use std::path::{Component, Path, PathBuf};

const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Where an internal link may point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalTarget {
    /// The blog index, which the site always generates
    BlogRoot,
    /// The link is valid if any of these files exists
    Candidates(Vec<PathBuf>),
}

// The two content trees internal links resolve against
#[derive(Debug, Clone)]
pub struct SiteLayout {
    blog_dir: PathBuf,
    docs_dir: PathBuf,
}

impl SiteLayout {
    pub fn new(blog_dir: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            blog_dir: blog_dir.into(),
            docs_dir: docs_dir.into(),
        }
    }

    // Maps an internal link to the files that would satisfy it
    pub fn resolve(&self, link: &str) -> InternalTarget {
        let path = normalize(link);

        if path == "blog" || path.starts_with("blog/") {
            let post = path.strip_prefix("blog").unwrap_or(path);
            let post = post.strip_prefix('/').unwrap_or(post);
            if post.is_empty() || post == "index" {
                return InternalTarget::BlogRoot;
            }
            return InternalTarget::Candidates(with_extensions(&self.blog_dir, post));
        }

        let mut candidates = with_extensions(&self.docs_dir, path);
        candidates.extend(with_extensions(&content_path(&self.docs_dir, path), "index"));
        InternalTarget::Candidates(candidates)
    }

    // Checks whether an internal link points at an existing content file
    //
    // A missing file is the normal "broken link" answer, not an error.
    pub async fn check_internal(&self, link: &str) -> bool {
        match self.resolve(link) {
            InternalTarget::BlogRoot => true,
            InternalTarget::Candidates(paths) => {
                for path in &paths {
                    if is_file(path).await {
                        return true;
                    }
                }
                false
            }
        }
    }
}

// Strips the parts of a link that don't name a file:
// leading "/", trailing ".html", trailing "/", then any "#fragment"
fn normalize(link: &str) -> &str {
    let path = link.strip_prefix('/').unwrap_or(link);
    let path = path.strip_suffix(".html").unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    match path.split('#').next() {
        Some(base) if !base.is_empty() => base,
        _ => "index",
    }
}

// Joins a link path onto a content root, keeping only plain name segments
//
// Extra leading slashes, "..", "." and drive prefixes are dropped, so the
// result always stays under `dir`. Path::join alone would replace `dir`
// entirely when handed an absolute segment like "/tmp/page".
fn content_path(dir: &Path, rel: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    let mut named = false;
    for component in Path::new(rel).components() {
        if let Component::Normal(part) = component {
            path.push(part);
            named = true;
        }
    }
    if !named {
        path.push("index");
    }
    path
}

// dir/name.mdx, dir/name.md
fn with_extensions(dir: &Path, name: &str) -> Vec<PathBuf> {
    let base = content_path(dir, name);
    EXTENSIONS
        .iter()
        .map(|ext| {
            // Append rather than set_extension, which would eat "v1.2"
            let mut file = base.clone().into_os_string();
            file.push(".");
            file.push(ext);
            PathBuf::from(file)
        })
        .collect()
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
