// src/checker/cache.rs
// =============================================================================
// Run-scoped memo of external link outcomes.
//
// The same URL is often linked from many articles. The cache makes sure we
// only hit the network once per URL per run. It lives inside the LinkChecker
// for a single run, so nothing leaks between runs (or between tests).
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct ReachabilityCache {
    // Keyed by the exact URL string as written in the article
    entries: Mutex<HashMap<String, bool>>,
}

impl ReachabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<bool> {
        self.lock().get(url).copied()
    }

    pub fn insert(&self, url: &str, reachable: bool) {
        self.lock().insert(url.to_string(), reachable);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // The lock is only ever held for a single map operation, never across
    // an .await, so a poisoned mutex can only come from a panic inside
    // HashMap itself. The data is still a valid map in that case.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, bool>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
