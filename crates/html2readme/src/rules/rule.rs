//! A single substitution rule for the cleanup pass.

use std::borrow::Cow;

use fancy_regex::{Regex, RegexBuilder};

use crate::{Html2ReadmeError, Result};

/// Backtrack budget for short inputs, same as fancy-regex's default
const MIN_BACKTRACK_LIMIT: usize = 1_000_000;

/// Backtracks allowed per input byte. Look-around rules scan lazily across
/// the whole text, so their backtrack count grows with its length.
const BACKTRACKS_PER_BYTE: usize = 16;

/// A `(pattern, replacement)` pair applied as a substitution.
///
/// The pattern uses `fancy-regex` syntax, so look-around is available. It is
/// always matched with `.` also matching newlines. The replacement may refer
/// to capture groups as `$1` or `${1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
    /// Maximum number of matches replaced, 0 for all of them
    pub limit: usize,
}

impl Rule {
    /// Create a rule replacing every match. The pattern is not compiled until
    /// it is applied.
    pub fn new(
        pattern: impl Into<Cow<'static, str>>,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            limit: 0,
        }
    }

    /// Rule that replaces only the first match
    pub fn first(
        pattern: impl Into<Cow<'static, str>>,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            limit: 1,
            ..Self::new(pattern, replacement)
        }
    }

    /// Rule that deletes every match
    pub fn remove(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self::new(pattern, "")
    }

    /// Compile the pattern in dot-matches-newline mode
    pub fn compile(&self) -> Result<Regex> {
        self.compile_with_limit(MIN_BACKTRACK_LIMIT)
    }

    fn compile_with_limit(&self, backtrack_limit: usize) -> Result<Regex> {
        RegexBuilder::new(&format!("(?s){}", self.pattern))
            .backtrack_limit(backtrack_limit)
            .build()
            .map_err(|source| Html2ReadmeError::InvalidPattern {
                pattern: self.pattern.to_string(),
                source: Box::new(source),
            })
    }

    /// Replace the matches of this rule in `text`.
    ///
    /// The backtrack budget scales with the length of `text`, so only
    /// pathological patterns fail at match time.
    pub fn apply(&self, text: &str) -> Result<String> {
        let backtrack_limit = text
            .len()
            .saturating_mul(BACKTRACKS_PER_BYTE)
            .max(MIN_BACKTRACK_LIMIT);
        let regex = self.compile_with_limit(backtrack_limit)?;
        regex
            .try_replacen(text, self.limit, self.replacement.as_ref())
            .map(Cow::into_owned)
            .map_err(|source| Html2ReadmeError::Substitution {
                pattern: self.pattern.to_string(),
                source: Box::new(source),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_with_capture_groups() {
        let rule = Rule::new(r"(\w+)@(\w+)", "${2} at ${1}");
        assert_eq!(rule.apply("me@home, you@work").unwrap(), "home at me, work at you");
    }

    #[test]
    fn test_dot_matches_newline() {
        let rule = Rule::remove(r"<<.*?>>");
        assert_eq!(rule.apply("a<<one\ntwo>>b").unwrap(), "ab");
    }

    #[test]
    fn test_lookaround() {
        let rule = Rule::new(r"(?<!#)## ", "### ");
        assert_eq!(rule.apply("## a\n### b").unwrap(), "### a\n### b");
    }

    #[test]
    fn test_no_match_is_unchanged() {
        let rule = Rule::remove("absent");
        assert_eq!(rule.apply("present").unwrap(), "present");
    }

    #[test]
    fn test_first_replaces_once() {
        let rule = Rule::first("note:", "**note:**");
        assert_eq!(rule.apply("note: a\nnote: b").unwrap(), "**note:** a\nnote: b");
    }

    #[test]
    fn test_lookaround_scales_with_input() {
        let text = format!("head\n Task URLs{}\n### 1. Next", "z".repeat(2_000_000));
        let rule = Rule::remove(r"(\n Task URLs).*?(?=(?<!#)### \d{1,2}\.)");
        assert_eq!(rule.apply(&text).unwrap(), "head### 1. Next");
    }

    #[test]
    fn test_runaway_backtracking_fails() {
        let err = Rule::remove(r"(a|b|ab)*(?=c)")
            .apply(&"ab".repeat(200))
            .unwrap_err();
        assert!(matches!(err, Html2ReadmeError::Substitution { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::remove("(unclosed").apply("text").unwrap_err();
        assert!(matches!(err, Html2ReadmeError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
