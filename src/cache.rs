/// Compile-once cache for route patterns
///
/// Route paths are assumed finite and registered once at startup, so the
/// cache never evicts. Entries are immutable after insertion and shared
/// via `Arc` across concurrent match calls.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::PatternError;
use crate::route::CompiledPattern;

/// Concurrency-safe mapping from route path to its compiled pattern
///
/// Reads take a shared lock; a first-time lookup compiles outside any
/// lock, then inserts under the write lock. Concurrent misses for the
/// same key may race to compile, but `entry().or_insert` keeps a single
/// winner: every caller leaves with the one stored instance.
///
/// # Examples
///
/// ```
/// use segment_router::MatcherCache;
/// use std::sync::Arc;
///
/// let cache = MatcherCache::new();
/// let first = cache.get_or_compile("users/{id}").unwrap();
/// let second = cache.get_or_compile("users/{id}").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MatcherCache {
    patterns: RwLock<HashMap<String, Arc<CompiledPattern>>>,
}

impl MatcherCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            patterns: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the compiled pattern for `route_path`, compiling on first use
    ///
    /// # Errors
    ///
    /// Propagates [`PatternError`] from compilation. Failed compilations
    /// are never inserted, so a malformed route path errors on every
    /// lookup and leaves other cached route paths untouched.
    pub fn get_or_compile(&self, route_path: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        // Fast path: already compiled.
        {
            let patterns = self
                .patterns
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(pattern) = patterns.get(route_path) {
                return Ok(Arc::clone(pattern));
            }
        }

        // Miss: compile without holding any lock, then insert. Losers of
        // a same-key race discard their copy and take the stored one.
        let compiled = Arc::new(CompiledPattern::compile(route_path)?);

        let mut patterns = self
            .patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let stored = patterns
            .entry(route_path.to_string())
            .or_insert_with(|| {
                debug!(route_path, "cached compiled route pattern");
                compiled
            });
        Ok(Arc::clone(stored))
    }

    /// Number of cached compiled patterns
    pub fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no compiled patterns
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `route_path` has been compiled and cached
    pub fn contains(&self, route_path: &str) -> bool {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(route_path)
    }
}
