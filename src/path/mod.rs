/// Path utilities consumed by the pattern matcher
///
/// All functions are **pure**: given same input, always produce same output
/// with no side effects.

use std::borrow::Cow;

/// Splits a raw path into its non-empty segments
///
/// **Pure function**: No side effects, deterministic output.
///
/// Leading, trailing and doubled slashes are normalized away by dropping
/// the empty entries they produce.
///
/// # Examples
///
/// ```
/// use segment_router::path::split_segments;
///
/// assert_eq!(split_segments("/users/42"), vec!["users", "42"]);
/// assert_eq!(split_segments("users/42/"), vec!["users", "42"]);
/// assert_eq!(split_segments("//users//42"), vec!["users", "42"]);
/// assert_eq!(split_segments("/"), Vec::<&str>::new());
/// ```
///
/// # Performance
///
/// - O(n) where n is path length
/// - Borrows from the input; one allocation for the segment vector
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Checks whether a route-path segment token is a `{name}` placeholder
///
/// **Pure predicate**: segment token → bool.
///
/// # Examples
///
/// ```
/// use segment_router::path::is_parameterized;
///
/// assert!(is_parameterized("{id}"));
/// assert!(!is_parameterized("users"));
/// assert!(!is_parameterized("{id")); // Unclosed brace
/// ```
pub fn is_parameterized(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('{') && token.ends_with('}')
}

/// Extracts the parameter name from a `{name}` placeholder token
///
/// Strips the enclosing braces. Callers check [`is_parameterized`] first;
/// on a non-placeholder token this simply returns the token unchanged.
///
/// # Examples
///
/// ```
/// use segment_router::path::parameter_name;
///
/// assert_eq!(parameter_name("{id}"), "id");
/// assert_eq!(parameter_name("{user_id}"), "user_id");
/// ```
pub fn parameter_name(token: &str) -> &str {
    token.trim_start_matches('{').trim_end_matches('}')
}

/// Percent-decodes a captured value
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`:
/// inputs without escape sequences are returned borrowed.
///
/// Decoding failures (escape sequences that do not form valid UTF-8) fall
/// back to the raw input — match-time logic never errors on request data.
///
/// # Examples
///
/// ```
/// use segment_router::path::unescape;
///
/// assert_eq!(unescape("2019"), "2019");
/// assert_eq!(unescape("4%205"), "4 5");
/// assert_eq!(unescape("%32%30%31%39"), "2019");
/// ```
pub fn unescape(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
