//! # html2markdown
//!
//! Convert HTML documents to Markdown.
//!
//! The document tree is rewritten bottom-up: every element's children are
//! converted first and the element's [`Rule`] then turns that content into a
//! Markdown fragment. Rules are looked up by tag in a [`Scheme`]; tags with
//! no rule are kept as HTML around their converted content, so embedded raw
//! HTML survives conversion.
//!
//! ```text
//! HTML ─▶ preprocess ─▶ parse ─▶ Node tree ─▶ TreeRewriter ─▶ postprocess ─▶ Markdown
//! ```
//!
//! ## Example
//!
//! ```rust
//! let markdown = html2markdown::convert("<h1>Hello</h1><p>Some <strong>bold</strong> text</p>");
//! assert_eq!(markdown, "# Hello\n\nSome **bold** text");
//! ```
//!
//! ## Custom schemes
//!
//! A custom [`Scheme`] replaces the default table completely:
//!
//! ```rust
//! use html2markdown::{Converter, Rule, Scheme};
//!
//! let scheme = Scheme::new()
//!     .with_rule("strong", Rule::markdown(|_, content| format!("__{}__", content)))
//!     .with_rule("span", Rule::unwrap());
//!
//! let converter = Converter::with_scheme(scheme);
//! assert_eq!(converter.convert("<span><strong>hi</strong></span>"), "__hi__");
//! ```
//!
//! ## Example (Node-based)
//!
//! Without the default `html` feature the crate converts caller-built trees:
//!
//! ```rust
//! use html2markdown::{Converter, Node};
//!
//! let list = Node::element("ol")
//!     .with_child(Node::element("li").with_child(Node::text("first")))
//!     .with_child(Node::element("li").with_child(Node::text("second")));
//!
//! assert_eq!(Converter::new().convert_node(&list), "1.  first\n1.  second");
//! ```

pub mod ancestry;
mod converter;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod postprocess;
mod preprocess;
mod rewrite;
mod rules;

pub use ancestry::{ListAncestry, ListKind};
pub use converter::Converter;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Attributes, Node, NodeType};
pub use postprocess::{collapse_whitespace, postprocess};
pub use preprocess::preprocess;
pub use rewrite::TreeRewriter;
pub use rules::{default_scheme, Replacement, ReplacementFn, Rule, RuleContext, Scheme};

use std::path::PathBuf;

/// Error type for html2markdown operations.
///
/// Conversion itself never fails; errors come from reading input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert an HTML string to Markdown with the default scheme
#[cfg(feature = "html")]
pub fn convert(html: &str) -> String {
    Converter::new().convert(html)
}

/// Convert an HTML string to Markdown with a custom scheme.
///
/// The scheme replaces the default one; rules are not merged.
#[cfg(feature = "html")]
pub fn convert_with_scheme(html: &str, scheme: Scheme) -> String {
    Converter::with_scheme(scheme).convert(html)
}
