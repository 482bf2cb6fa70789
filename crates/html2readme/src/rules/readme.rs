//! Cleanup rules for project pages copied from the course intranet.
//!
//! Each rule runs over the output of the previous one, so later rules rely on
//! the shape earlier rules leave behind (e.g. task headings are normalized to
//! `### N. Title` before the task metadata rules look for them).

use super::Rule;

/// Create all README cleanup rules, in application order
pub(super) fn readme_rules() -> Vec<Rule> {
    vec![
        project_badge_rule(),
        header_before_requirements_rule(),
        quiz_completion_rule(),
        task_heading_whitespace_rule(),
        task_urls_between_tasks_rule(),
        tips_link_rule(),
        fenced_inline_code_rule(),
        mandatory_task_info_rule(),
        advanced_task_info_rule(),
        trailing_task_urls_rule(),
        dead_link_rule(),
    ]
}

fn project_badge_rule() -> Rule {
    Rule::remove(r"(!\[Project badge\].*?\n)")
}

/// Keep the title, drop the concepts/resources blurb until `## Requirements`
fn header_before_requirements_rule() -> Rule {
    Rule::new(r"(# .*?\n).*?(## Requirements)", "${1}${2}")
}

fn quiz_completion_rule() -> Rule {
    Rule::new(r"(\*\*Great!\*\*).*?(## Tasks)", "${2}")
}

fn task_heading_whitespace_rule() -> Rule {
    Rule::new(r"(### )\s*(\d{1,2}\. .*?)", "${1}${2}")
}

/// ` Task URLs` block up to the next numbered task heading
fn task_urls_between_tasks_rule() -> Rule {
    Rule::remove(r"(\n Task URLs).*?(?=(?<!#)### \d{1,2}\.)")
}

fn tips_link_rule() -> Rule {
    Rule::remove(r"\[Tips\].*?\n")
}

/// `<pre><code>` renders as a fence around an inline code span
fn fenced_inline_code_rule() -> Rule {
    Rule::new(r"```\n`(.*?)`\n```", "```\n${1}\n```")
}

fn mandatory_task_info_rule() -> Rule {
    Rule::new(r"(### \d+\. .*?)\s+mandatory.*?Task Body\s+", "${1}\n")
}

fn advanced_task_info_rule() -> Rule {
    Rule::new(r"(### \d+\. .*?)\s+#advanced.*?Task Body\s+", "${1}\n")
}

/// Last task's ` Task URLs` block runs to the end of the document
fn trailing_task_urls_rule() -> Rule {
    Rule::remove(r"(\n Task URLs).*")
}

fn dead_link_rule() -> Rule {
    Rule::remove(r"\(/rltoken.*?\)\n")
}
