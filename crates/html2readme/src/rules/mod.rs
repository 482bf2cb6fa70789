//! Ordered substitution rules for the cleanup pass.

mod extension;
mod readme;
mod rule;

pub use rule::Rule;

/// Ordered collection of cleanup rules.
///
/// Order is significant: rules are applied first to last, each one over the
/// text produced by the rules before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Create an empty rule list
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The fixed rule set for project-page READMEs
    pub fn readme() -> Self {
        Self {
            rules: readme::readme_rules(),
        }
    }

    /// Lighter rule set used by the browser-extension export: tidies task
    /// metadata and code fence spacing, then trims the document
    pub fn extension() -> Self {
        Self {
            rules: extension::extension_rules(),
        }
    }

    /// Append a rule, to run after all existing rules
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
