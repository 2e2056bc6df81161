//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the [`Node`] tree consumed by the rewriter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a document [`Node`].
///
/// The returned root holds the children of `<body>`. Text and attribute
/// values are re-encoded so that the tree carries raw markup, as the
/// rewriter expects. Comments, doctypes and processing instructions are skipped.
///
/// # Example
///
/// ```rust
/// use html2markdown::{parse_html, Converter};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let markdown = Converter::new().convert_node(&node);
/// assert_eq!(markdown, "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let body = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body");

    let mut node = Node::document();
    append_children(&mut node, body.unwrap_or(root));
    node
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    // Re-encode values so attributes hold raw markup, as text leaves do
    let attrs: Vec<(&str, String)> = element
        .value()
        .attrs()
        .map(|(name, value)| (name, html_escape::encode_double_quoted_attribute(value).into_owned()))
        .collect();

    let mut node = Node::element(tag);
    node.attributes = attrs
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();

    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&html_escape::encode_text(&**text)));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}
