/// Pattern compilation errors

use thiserror::Error;

/// Error raised while compiling a route path into segment matchers
///
/// A failed match is never an error — mismatches are reported through the
/// negative [`RouteMatch`](crate::RouteMatch) verdict. Compilation errors
/// mean the route pattern itself is malformed and surface on first use of
/// that route path (at registration time when callers pre-warm via
/// [`RoutePatternMatcher::precompile`](crate::RoutePatternMatcher::precompile),
/// otherwise at first request).
#[derive(Debug, Error)]
pub enum PatternError {
    /// A segment shaped like a regex group (`(?...`) failed to compile
    #[error("invalid regex route segment `{segment}`: {source}")]
    InvalidRegex {
        /// The offending route-path segment token
        segment: String,
        #[source]
        source: regex::Error,
    },
}
