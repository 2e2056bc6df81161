//! Post-order tree rewriting.
//!
//! Children are rewritten before their parent, so every rule sees the
//! finished Markdown of its content. Lists push their kind onto a
//! [`ListAncestry`] while their subtree is rewritten, which lets `li` rules
//! pick the marker of the nearest enclosing list.

use crate::ancestry::{ListAncestry, ListKind};
use crate::node::{Node, NodeType};
use crate::rules::{RuleContext, Scheme};

/// Walks a [`Node`] tree and applies the rules of a [`Scheme`].
///
/// A rewriter is cheap to build and holds no state between calls to
/// [`TreeRewriter::rewrite`] once the ancestry stack has unwound.
pub struct TreeRewriter<'s> {
    scheme: &'s Scheme,
    ancestry: ListAncestry,
}

impl<'s> TreeRewriter<'s> {
    pub fn new(scheme: &'s Scheme) -> Self {
        Self {
            scheme,
            ancestry: ListAncestry::new(),
        }
    }

    /// Rewrite a node and its subtree to a Markdown fragment
    pub fn rewrite(&mut self, node: &Node) -> String {
        match node.node_type {
            NodeType::Text => node.text.clone().unwrap_or_default(),
            NodeType::Document => self.rewrite_children(node),
            NodeType::Element => self.rewrite_element(node),
        }
    }

    fn rewrite_children(&mut self, node: &Node) -> String {
        let mut content = String::new();
        for child in node.children() {
            content.push_str(&self.rewrite(child));
        }
        content
    }

    fn rewrite_element(&mut self, node: &Node) -> String {
        let tag = node.tag_name();

        let content = match ListKind::from_tag(tag) {
            Some(kind) => {
                self.ancestry.push(kind);
                let content = self.rewrite_children(node);
                self.ancestry.pop();
                content
            }
            None => self.rewrite_children(node),
        };

        match self.scheme.lookup(tag) {
            Some(rule) => {
                let ctx = RuleContext::new(tag, &node.attributes, self.ancestry.nearest());
                rule.apply(&ctx, &content)
            }
            None => {
                log::trace!("no rule for <{}>, passing through as HTML", tag);
                node.outer_html_with(&content)
            }
        }
    }
}
