pub mod pattern_store;
pub mod standard_patterns;

use crate::validation::{validate_and_create_pattern, PatternError};
use regex_automata::meta;

use self::pattern_store::get_memoized_pattern;

/// A validated pattern that only matches when it covers the whole text.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: meta::Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            source: pattern.to_owned(),
            regex: validate_and_create_pattern(pattern)?,
        })
    }

    /// The pattern as it was written, without the implicit anchors
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Full-string match of `input` against `pattern`.
///
/// Compiled patterns are kept in a bounded cache, so repeatedly checking against the same
/// pattern only pays the compilation cost once.
pub fn matches_pattern(input: &str, pattern: &str) -> Result<bool, PatternError> {
    Ok(get_memoized_pattern(pattern)?.is_match(input))
}
