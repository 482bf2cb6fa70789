//! Cleanup rules used by the browser-extension export.
//!
//! Unlike the README rules these do not cut whole sections; they tidy task
//! metadata in place (scores, check results, repo/file lines) and fix spacing
//! around code fences.

use super::Rule;

/// Create all extension cleanup rules, in application order
pub(super) fn extension_rules() -> Vec<Rule> {
    vec![
        Rule::new(r"\n{3,}", "\n\n"),
        Rule::remove(r"\*\*\s*\*\*"),
        Rule::remove(r"Score:\s*\d+\.\d+%"),
        Rule::remove(r"\(Checks completed[^\n]*?\)"),
        Rule::remove("Repo:\n\n"),
        Rule::remove("File:\n\n"),
        Rule::new(r"Directory:\s*([^\n]+)", "**Directory:** `${1}`"),
        Rule::new(r"File:\s*([^\n]+)", "**File:** `${1}`"),
        Rule::first("Read or watch:", "**Read or watch:**"),
        Rule::first("MDN resources:", "**MDN resources:**"),
        // empty fence pairs, then blank lines hugging a fence
        Rule::remove("```\n\n```"),
        Rule::new("\n\n```\n", "\n```\n"),
        Rule::new("\n```\n\n", "\n```\n"),
        Rule::remove(r"\A\s+|\s+\z"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean;
    use crate::rules::Rules;

    #[test]
    fn test_all_rules_compile() {
        for rule in extension_rules() {
            assert!(rule.compile().is_ok(), "pattern failed: {}", rule.pattern);
        }
    }

    #[test]
    fn test_task_metadata() {
        let md = concat!(
            "\n\nRead or watch:\n\n\n\n* [MDN](x)\n\nRead or watch:\n\n",
            "MDN resources:\n\nScore: 65.0%\n\n(Checks completed: 100%)\n\n",
            "Repo:\n\nGitHub repository: alx\n\nDirectory: 0x00-python\n\n",
            "File: 0-run\n\n**  **\n\n```\n\n```\n\nText\n\n\n```\ncode\n```\n\nEnd  \n",
        );
        let result = clean(md, &Rules::extension()).unwrap();
        assert_eq!(
            result,
            concat!(
                "**Read or watch:**\n\n* [MDN](x)\n\nRead or watch:\n\n",
                "**MDN resources:**\n\nGitHub repository: alx\n\n",
                "**Directory:** `0x00-python`\n\n**File:** `0-run`\n\n",
                "Text\n```\ncode\n```\nEnd",
            )
        );
    }

    #[test]
    fn test_checks_completed_stays_on_one_line() {
        let result = clean("(Checks completed\n) kept", &Rules::extension()).unwrap();
        assert_eq!(result, "(Checks completed\n) kept");
    }

    #[test]
    fn test_only_first_heading_label_is_bold() {
        let result = clean("MDN resources: a\nMDN resources: b", &Rules::extension()).unwrap();
        assert_eq!(result, "**MDN resources:** a\nMDN resources: b");
    }
}
