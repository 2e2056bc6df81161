//! Rule and Replacement types for element conversion.

use std::fmt;
use std::sync::Arc;

use crate::ancestry::ListKind;
use crate::node::Attributes;

/// Type alias for replacement functions
pub type ReplacementFn = Arc<dyn Fn(&RuleContext<'_>, &str) -> Replacement + Send + Sync>;

/// What a rule does with an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Emit this Markdown in place of the element
    Markdown(String),
    /// Discard the tag, keep the converted content
    Unwrap,
    /// Discard the tag and its content
    Drop,
}

/// Everything a rule may look at besides the converted content
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Lowercase tag name
    pub tag: &'a str,
    pub attributes: &'a Attributes,
    /// Nearest enclosing list, `None` outside of any list
    pub list: Option<ListKind>,
}

impl<'a> RuleContext<'a> {
    pub fn new(tag: &'a str, attributes: &'a Attributes, list: Option<ListKind>) -> Self {
        Self {
            tag,
            attributes,
            list,
        }
    }

    /// Attribute value, or the empty string when it is absent
    pub fn attr(&self, name: &str) -> &'a str {
        self.attributes.get_or_empty(name)
    }
}

/// A rule defines how to convert an element to Markdown.
///
/// Cloning is cheap; the replacement function is shared.
#[derive(Clone)]
pub struct Rule {
    /// Replacement function that generates Markdown
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(replacement: F) -> Self
    where
        F: Fn(&RuleContext<'_>, &str) -> Replacement + Send + Sync + 'static,
    {
        Self {
            replacement: Arc::new(replacement),
        }
    }

    /// Create a rule that always produces Markdown from the content
    pub fn markdown<F>(replacement: F) -> Self
    where
        F: Fn(&RuleContext<'_>, &str) -> String + Send + Sync + 'static,
    {
        Self::new(move |ctx, content| Replacement::Markdown(replacement(ctx, content)))
    }

    /// Rule that keeps the content and discards the tag
    pub fn unwrap() -> Self {
        Self::new(|_, _| Replacement::Unwrap)
    }

    /// Rule that discards the tag and everything inside it
    pub fn drop() -> Self {
        Self::new(|_, _| Replacement::Drop)
    }

    /// Run the replacement function without resolving it
    pub fn replace(&self, ctx: &RuleContext<'_>, content: &str) -> Replacement {
        (self.replacement)(ctx, content)
    }

    /// Apply this rule and resolve the replacement to a string
    pub fn apply(&self, ctx: &RuleContext<'_>, content: &str) -> String {
        match self.replace(ctx, content) {
            Replacement::Markdown(markdown) => markdown,
            Replacement::Unwrap => content.to_string(),
            Replacement::Drop => String::new(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
