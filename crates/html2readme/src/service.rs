//! ReadmeService - the main entry point for HTML to README conversion.

use crate::clean::clean;
use crate::convert::convert;
use crate::rules::{Rule, Rules};
use crate::Result;

/// Converts HTML to Markdown, then cleans it with an ordered rule list.
///
/// The service holds no per-call state, so one instance can convert any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct ReadmeService {
    rules: Rules,
}

impl ReadmeService {
    /// Create a service with the project-page README rules
    pub fn new() -> Self {
        Self {
            rules: Rules::readme(),
        }
    }

    /// Create a service with a custom rule list
    pub fn with_rules(rules: Rules) -> Self {
        Self { rules }
    }

    /// Append a cleanup rule
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Convert HTML to raw Markdown, without cleanup
    pub fn convert(&self, html: &str) -> String {
        convert(html)
    }

    /// Clean Markdown with this service's rules
    pub fn clean(&self, markdown: &str) -> Result<String> {
        clean(markdown, &self.rules)
    }

    /// Convert HTML and clean the result.
    ///
    /// Fails only if a cleanup rule fails, in which case no Markdown is
    /// returned.
    pub fn readme(&self, html: &str) -> Result<String> {
        let markdown = self.convert(html);
        tracing::debug!(bytes = markdown.len(), "converted html to markdown");
        self.clean(&markdown)
    }
}

impl Default for ReadmeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Html2ReadmeError;

    #[test]
    fn test_readme_without_boilerplate() {
        let service = ReadmeService::new();
        let result = service
            .readme("<h1>Title</h1><p>Hello <strong>World</strong></p>")
            .unwrap();
        assert_eq!(result, "# Title\n\nHello **World**");
    }

    #[test]
    fn test_readme_strips_badge() {
        let service = ReadmeService::new();
        let html = r#"<p><img src="https://x/badge.png" alt="Project badge"><br>Intro</p>"#;
        assert_eq!(service.readme(html).unwrap(), "Intro");
    }

    #[test]
    fn test_with_rules_is_injected() {
        let rules: Rules = vec![Rule::new("World", "Rust")].into_iter().collect();
        let service = ReadmeService::with_rules(rules);
        assert_eq!(service.readme("<p>Hello World</p>").unwrap(), "Hello Rust");
    }

    #[test]
    fn test_add_rule_runs_last() {
        let mut service = ReadmeService::with_rules(Rules::new());
        service
            .add_rule(Rule::new("a", "b"))
            .add_rule(Rule::new("b", "c"));
        assert_eq!(service.rules().len(), 2);
        assert_eq!(service.readme("a").unwrap(), "c");
    }

    #[test]
    fn test_failing_rule_returns_no_markdown() {
        let mut service = ReadmeService::new();
        service.rules_mut().push(Rule::remove("[unterminated"));
        let err = service.readme("<p>text</p>").unwrap_err();
        assert!(matches!(err, Html2ReadmeError::InvalidPattern { .. }));
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReadmeService>();
    }
}
