//! Pattern cleanup over converted Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Rules;
use crate::Result;

static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("hardcoded regex is valid"));

/// Apply `rules` in order, then collapse runs of blank lines.
///
/// Each rule sees the output of the rules before it. If any rule fails to
/// compile or to match, the whole clean fails and no text is returned.
///
/// # Example
///
/// ```rust
/// use html2readme::{clean, Rule, Rules};
///
/// let rules: Rules = vec![Rule::remove(r"DRAFT\n")].into_iter().collect();
/// assert_eq!(clean("DRAFT\nText\n\n\n\nEnd", &rules).unwrap(), "Text\n\nEnd");
/// ```
pub fn clean(markdown: &str, rules: &Rules) -> Result<String> {
    let mut result = markdown.to_string();

    for rule in rules {
        result = match rule.apply(&result) {
            Ok(replaced) => {
                tracing::debug!(
                    pattern = %rule.pattern,
                    changed = replaced != result,
                    "applied cleanup rule"
                );
                replaced
            }
            Err(err) => {
                tracing::warn!(pattern = %rule.pattern, error = %err, "cleanup rule failed");
                return Err(err);
            }
        };
    }

    Ok(collapse_blank_lines(&result))
}

/// Collapse three or more consecutive newlines into exactly two
pub fn collapse_blank_lines(markdown: &str) -> String {
    EXCESS_NEWLINES.replace_all(markdown, "\n\n").into_owned()
}
