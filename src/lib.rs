//! # segment-router
//!
//! Segment-based route pattern matching for web request dispatch.
//!
//! Given a request path pre-split into segments and a declared route path
//! pattern, answers "does this path satisfy this pattern, and what values
//! bind to its named parameters?". Patterns mix three segment kinds:
//!
//! - **Literals** — `users`, matched by exact, case-sensitive equality
//! - **Placeholders** — `{id}`, capture any single segment verbatim
//! - **Regex groups** — `(?<year>[0-9]{4})`, capture named groups from the
//!   percent-decoded segment (compiled case-insensitive)
//!
//! Compilation is amortized: each distinct route path is compiled once
//! into an ordered matcher sequence and cached for the lifetime of the
//! [`RoutePatternMatcher`]. Matching itself is synchronous, lock-free and
//! safe to run concurrently from many dispatch threads.
//!
//! # Examples
//!
//! ```
//! use segment_router::RoutePatternMatcher;
//!
//! let matcher = RoutePatternMatcher::new();
//!
//! let result = matcher.match_route(&["users", "42"], "users/{id}").unwrap();
//! assert!(result.is_match());
//! assert_eq!(result.param("id"), Some("42"));
//!
//! let result = matcher.match_route(&["users"], "users/{id}").unwrap();
//! assert!(!result.is_match());
//! ```

use std::collections::HashMap;

use tracing::trace;

mod cache;
mod error;
pub mod path;
pub mod route;

pub use cache::MatcherCache;
pub use error::PatternError;
pub use route::segment::{compile_segment, SegmentMatcher};
pub use route::CompiledPattern;

/// Verdict of matching one request path against one route pattern
///
/// Created fresh per match call. A negative verdict always carries an
/// empty parameter map — partial captures from failed matches are never
/// exposed.
///
/// # Examples
///
/// ```
/// use segment_router::RoutePatternMatcher;
///
/// let matcher = RoutePatternMatcher::new();
/// let result = matcher
///     .match_route(&["posts", "2019", "hello"], "posts/(?<year>[0-9]{4})/{slug}")
///     .unwrap();
///
/// assert!(result.is_match());
/// assert_eq!(result.param("year"), Some("2019"));
/// assert_eq!(result.param("slug"), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    matched: bool,
    params: HashMap<String, String>,
}

impl RouteMatch {
    fn success(params: HashMap<String, String>) -> Self {
        Self {
            matched: true,
            params,
        }
    }

    fn failure() -> Self {
        Self {
            matched: false,
            params: HashMap::new(),
        }
    }

    /// Whether the request path satisfied the route pattern
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// The merged parameter mapping (empty on a failed match)
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Looks up a single captured parameter by name (case-sensitive)
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Consumes the verdict, yielding the parameter mapping
    pub fn into_params(self) -> HashMap<String, String> {
        self.params
    }
}

/// Dispatch-time pattern matcher with a compile-once pattern cache
///
/// The sole entry point routing logic calls per candidate route. Owns its
/// [`MatcherCache`] explicitly — the cache lives exactly as long as this
/// matcher, never as ambient global state. One instance is meant to be
/// shared (e.g. behind `Arc`) across all dispatch threads.
///
/// # Examples
///
/// ```
/// use segment_router::RoutePatternMatcher;
///
/// let matcher = RoutePatternMatcher::new();
///
/// // Pre-warm at registration time so malformed patterns fail fast.
/// matcher.precompile("users/{id}/posts/(?<year>[0-9]{4})").unwrap();
/// assert!(matcher.precompile("users/(?<bad").is_err());
///
/// let result = matcher
///     .match_route(&["users", "42", "posts", "2019"], "users/{id}/posts/(?<year>[0-9]{4})")
///     .unwrap();
/// assert!(result.is_match());
/// ```
#[derive(Debug, Default)]
pub struct RoutePatternMatcher {
    cache: MatcherCache,
}

impl RoutePatternMatcher {
    /// Creates a matcher with an empty pattern cache
    pub fn new() -> Self {
        Self {
            cache: MatcherCache::new(),
        }
    }

    /// Matches pre-split request segments against a route path pattern
    ///
    /// Looks up (or compiles and caches) the pattern for `route_path`,
    /// runs it against `segments`, and returns the verdict. Any mismatch
    /// — wrong segment count, literal inequality, regex non-match — is a
    /// normal negative verdict, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `route_path` itself is malformed
    /// (invalid regex segment). This surfaces on every call for that
    /// route path and does not affect other cached patterns.
    pub fn match_route(
        &self,
        segments: &[&str],
        route_path: &str,
    ) -> Result<RouteMatch, PatternError> {
        let pattern = self.cache.get_or_compile(route_path)?;

        let verdict = match pattern.matches(segments) {
            Some(params) => RouteMatch::success(params),
            None => RouteMatch::failure(),
        };

        trace!(
            route_path,
            matched = verdict.is_match(),
            "matched route pattern"
        );

        Ok(verdict)
    }

    /// Matches a raw request path against a route path pattern
    ///
    /// Convenience over [`match_route`](Self::match_route) that splits
    /// `path` on `/` (dropping empty segments) first.
    ///
    /// # Examples
    ///
    /// ```
    /// use segment_router::RoutePatternMatcher;
    ///
    /// let matcher = RoutePatternMatcher::new();
    /// let result = matcher.match_path("/users/42/", "users/{id}").unwrap();
    /// assert!(result.is_match());
    /// assert_eq!(result.param("id"), Some("42"));
    /// ```
    pub fn match_path(&self, path: &str, route_path: &str) -> Result<RouteMatch, PatternError> {
        let segments = path::split_segments(path);
        self.match_route(&segments, route_path)
    }

    /// Compiles and caches a route path without matching anything
    ///
    /// Callers registering routes at startup use this to surface
    /// malformed patterns immediately instead of at first request.
    pub fn precompile(&self, route_path: &str) -> Result<(), PatternError> {
        self.cache.get_or_compile(route_path).map(|_| ())
    }

    /// Number of route paths compiled so far
    pub fn compiled_count(&self) -> usize {
        self.cache.len()
    }
}
