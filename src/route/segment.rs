/// Per-segment matching strategies
///
/// A route path compiles into one [`SegmentMatcher`] per segment. The
/// closed sum type keeps the match dispatch exhaustive-checked instead of
/// open-ended trait objects.

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;
use crate::path;

/// A single named value extracted from a matching segment
pub type Capture = (String, String);

/// Matching strategy for one position of a compiled route pattern
///
/// # Variants
///
/// - `Literal` — exact, case-sensitive string equality
/// - `Capture` — `{name}` placeholder, accepts any segment and binds it verbatim
/// - `NamedGroup` — `(?<name>...)` regex applied to the percent-decoded segment
///
/// # Examples
///
/// ```
/// use segment_router::route::segment::{compile_segment, SegmentMatcher};
///
/// let m = compile_segment("users").unwrap();
/// assert!(matches!(m, SegmentMatcher::Literal(_)));
///
/// let m = compile_segment("{id}").unwrap();
/// assert!(matches!(m, SegmentMatcher::Capture(_)));
///
/// let m = compile_segment("(?<year>[0-9]{4})").unwrap();
/// assert!(matches!(m, SegmentMatcher::NamedGroup(_)));
/// ```
#[derive(Debug, Clone)]
pub enum SegmentMatcher {
    /// Static text segment, matched by exact equality
    Literal(String),
    /// Placeholder segment, binds the raw segment value to the stored name
    Capture(String),
    /// Regex segment, binds each capture group of the compiled expression
    NamedGroup(Regex),
}

/// Compiles a raw route-path token into its segment matcher
///
/// **Pure function**: Maps token → SegmentMatcher by syntactic shape.
///
/// # Classification Rules (evaluated in order)
///
/// 1. **Placeholder**: `{name}` → [`SegmentMatcher::Capture`], braces stripped
/// 2. **Regex group**: token starts with `(?` → [`SegmentMatcher::NamedGroup`],
///    compiled case-insensitive
/// 3. **Literal**: anything else, stored verbatim
///
/// A token shaped like a regex group that fails to compile is a route
/// configuration error and is surfaced as [`PatternError::InvalidRegex`].
///
/// # Examples
///
/// ```
/// use segment_router::route::segment::compile_segment;
///
/// assert!(compile_segment("posts").is_ok());
/// assert!(compile_segment("{id}").is_ok());
/// assert!(compile_segment("(?<year>[0-9]{4})").is_ok());
/// assert!(compile_segment("(?<bad").is_err());
/// ```
pub fn compile_segment(token: &str) -> Result<SegmentMatcher, PatternError> {
    if path::is_parameterized(token) {
        return Ok(SegmentMatcher::Capture(
            path::parameter_name(token).to_string(),
        ));
    }

    if token.starts_with("(?") {
        let regex = RegexBuilder::new(token)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError::InvalidRegex {
                segment: token.to_string(),
                source,
            })?;
        return Ok(SegmentMatcher::NamedGroup(regex));
    }

    Ok(SegmentMatcher::Literal(token.to_string()))
}

impl SegmentMatcher {
    /// Matches one request segment, returning its captures on success
    ///
    /// `None` means the segment does not satisfy this matcher. `Some`
    /// carries the ordered captures the segment contributes (empty for
    /// literals).
    ///
    /// Placeholder captures keep the segment value verbatim — NOT
    /// percent-decoded. Regex captures come from the percent-decoded
    /// segment text. The asymmetry is part of the observed routing
    /// contract and is covered by tests; do not normalize it.
    pub fn match_segment(&self, value: &str) -> Option<Vec<Capture>> {
        match self {
            SegmentMatcher::Literal(literal) => {
                if literal == value {
                    Some(Vec::new())
                } else {
                    None
                }
            }
            SegmentMatcher::Capture(name) => {
                // A placeholder accepts any single segment value.
                Some(vec![(name.clone(), value.to_string())])
            }
            SegmentMatcher::NamedGroup(regex) => {
                let decoded = path::unescape(value);
                let captures = regex.captures(&decoded)?;

                // Group 0 is the whole match; report groups 1.. by their
                // declared name, or the index for unnamed groups. Groups
                // that did not participate contribute an empty value.
                let mut values = Vec::with_capacity(captures.len().saturating_sub(1));
                for (index, name) in regex.capture_names().enumerate().skip(1) {
                    let key = name
                        .map(str::to_string)
                        .unwrap_or_else(|| index.to_string());
                    let value = captures
                        .get(index)
                        .map(|group| group.as_str().to_string())
                        .unwrap_or_default();
                    values.push((key, value));
                }
                Some(values)
            }
        }
    }
}
