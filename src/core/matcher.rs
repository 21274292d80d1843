//! Wildcard filter matching for kman.
//!
//! Translates the filter typed by the user into a regular expression and applies it
//! as an unanchored search over file names:
//! - `*` matches any run of characters (including none)
//! - `?` matches exactly one character
//! - everything else, `.` and spaces included, matches itself
//!
//! The translated pattern is compiled with the [regex] crate on every filter change.
//! A pattern the engine refuses (e.g. one that blows the compiled size limit) surfaces
//! as a [FilterError], which callers treat as "keep the previous selection".

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Upper bound on the compiled program size of a single filter.
/// Filters are typed by hand, so anything beyond this is noise from a stuck key.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Compiled form of a wildcard filter.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    regex: Regex,
}

impl WildcardMatcher {
    /// Translates and compiles `wildcard`.
    /// The empty filter compiles to a matcher that accepts every name.
    pub fn compile(wildcard: &str) -> Result<Self, FilterError> {
        let regex = RegexBuilder::new(&to_regex_pattern(wildcard))
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;
        Ok(Self { regex })
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Rewrites a wildcard filter into regex syntax, one character at a time.
fn to_regex_pattern(wildcard: &str) -> String {
    let mut pattern = String::with_capacity(wildcard.len() * 2);
    let mut buf = [0u8; 4];
    for c in wildcard.chars() {
        match c {
            '.' => pattern.push_str("\\."),
            '?' => pattern.push('.'),
            '*' => pattern.push_str(".*"),
            c => pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    pattern
}
