/// Route pattern compilation and segment-sequence matching

pub mod segment;

use std::collections::HashMap;

use tracing::debug;

use crate::error::PatternError;
use crate::path;
use segment::{compile_segment, SegmentMatcher};

/// A route path compiled into an ordered sequence of segment matchers
///
/// Compiled once per distinct route path (see [`MatcherCache`]) and
/// immutable afterwards, so it is freely shared across concurrent match
/// calls. The matcher count is fixed at compile time.
///
/// [`MatcherCache`]: crate::MatcherCache
///
/// # Examples
///
/// ```
/// use segment_router::CompiledPattern;
///
/// let pattern = CompiledPattern::compile("users/{id}/posts").unwrap();
/// assert_eq!(pattern.len(), 3);
///
/// let params = pattern.matches(&["users", "42", "posts"]).unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
///
/// assert!(pattern.matches(&["users", "42"]).is_none()); // Wrong length
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    route_path: String,
    matchers: Vec<SegmentMatcher>,
}

impl CompiledPattern {
    /// Compiles a route path string into its ordered segment matchers
    ///
    /// **Pure function**: same route path always yields an equivalent
    /// pattern; no side effects beyond the returned value.
    ///
    /// The path is split on `/` with empty segments discarded, so
    /// `"users/{id}"`, `"/users/{id}"` and `"users//{id}/"` compile to the
    /// same two-segment pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] when a `(?`-shaped segment
    /// is not a valid regular expression. A malformed route pattern is a
    /// configuration error, surfaced at compile time rather than deferred
    /// to match time.
    pub fn compile(route_path: &str) -> Result<Self, PatternError> {
        let matchers = path::split_segments(route_path)
            .into_iter()
            .map(compile_segment)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            route_path,
            segments = matchers.len(),
            "compiled route pattern"
        );

        Ok(Self {
            route_path: route_path.to_string(),
            matchers,
        })
    }

    /// The route path string this pattern was compiled from
    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    /// Number of segment matchers in this pattern
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether this pattern has no segments (compiled from `"/"` or `""`)
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Matches pre-split request segments against this pattern
    ///
    /// Returns `Some(params)` when every positional matcher succeeds and
    /// the segment count matches exactly; `None` otherwise. Callers must
    /// not rely on partial captures — a failed match carries nothing.
    ///
    /// # Ordering
    ///
    /// Evaluation is strictly left-to-right and short-circuits on the
    /// first failing position, so later matchers are never invoked after
    /// a failure. The same order resolves duplicate parameter names:
    /// captures merge in segment order and later positions overwrite
    /// earlier ones.
    pub fn matches(&self, segments: &[&str]) -> Option<HashMap<String, String>> {
        // Length gate: no per-segment matcher runs on a count mismatch.
        if segments.len() != self.matchers.len() {
            return None;
        }

        let mut results = Vec::with_capacity(self.matchers.len());
        for (matcher, segment) in self.matchers.iter().zip(segments) {
            results.push(matcher.match_segment(segment)?);
        }

        let mut params = HashMap::new();
        for captures in results {
            for (name, value) in captures {
                params.insert(name, value);
            }
        }

        Some(params)
    }
}
