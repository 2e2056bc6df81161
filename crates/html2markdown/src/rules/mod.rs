//! Tag rules and the scheme that maps tags to them.

mod defaults;
mod rule;

pub use defaults::default_scheme;
pub use rule::{Replacement, ReplacementFn, Rule, RuleContext};

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

static DEFAULT_SCHEME: Lazy<Arc<Scheme>> = Lazy::new(|| Arc::new(default_scheme()));

/// Immutable mapping from lowercase tag name to [`Rule`].
///
/// Tags without a rule are passed through as HTML by the rewriter. A custom
/// scheme handed to a converter replaces the default one entirely; nothing
/// is merged.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    rules: IndexMap<String, Rule>,
}

impl Scheme {
    /// Create an empty scheme (every tag passes through)
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared default scheme, built once per process
    pub fn shared_default() -> Arc<Scheme> {
        Arc::clone(&DEFAULT_SCHEME)
    }

    /// Add a rule for a tag, replacing any previous rule for it
    pub fn with_rule(mut self, tag: &str, rule: Rule) -> Self {
        self.rules.insert(tag.to_ascii_lowercase(), rule);
        self
    }

    /// Add the same rule for several tags
    pub fn with_rules(mut self, tags: &[&str], rule: Rule) -> Self {
        for tag in tags {
            self.rules.insert(tag.to_ascii_lowercase(), rule.clone());
        }
        self
    }

    /// Find the rule for a tag (case-insensitive)
    pub fn lookup(&self, tag: &str) -> Option<&Rule> {
        match self.rules.get(tag) {
            Some(rule) => Some(rule),
            None => self.rules.get(&tag.to_ascii_lowercase()),
        }
    }

    /// Registered tags in insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
