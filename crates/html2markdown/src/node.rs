//! Document tree handed to the rewriter.
//!
//! Any HTML parser can build this structure; the bundled [`crate::html`]
//! module does so from scraper/html5ever output. Text leaves carry raw markup
//! (entities still encoded) so that rules read and write it verbatim and the
//! postprocessor decodes everything exactly once.

use indexmap::IndexMap;

/// Elements that never carry content and serialize without a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Node kinds the rewriter distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element with a tag, attributes and children
    Element,
    /// Raw text leaf
    Text,
    /// Document root: children only, never wrapped in a tag
    Document,
}

/// Ordered element attributes.
///
/// Names are lowercased on insert and the first occurrence of a name wins,
/// matching how HTML parsers treat duplicates. Values are raw markup, like
/// text leaves: entities stay encoded until the postprocessor decodes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute unless one with the same name is already present.
    ///
    /// Returns `false` when the attribute was ignored as a duplicate.
    pub fn insert(&mut self, name: &str, value: &str) -> bool {
        let name = name.to_ascii_lowercase();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, value.to_string());
        true
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(value) => Some(value.as_str()),
            None => self
                .entries
                .get(&name.to_ascii_lowercase())
                .map(String::as_str),
        }
    }

    /// Get an attribute value, or the empty string when it is absent
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as the attribute part of an HTML start tag (no leading space)
    fn to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.to_string()
                } else {
                    format!("{}=\"{}\"", name, protect_quotes(value))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// A node of the document tree.
///
/// Each node exclusively owns its children; sibling order is the source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, empty otherwise
    pub tag: String,

    /// Raw markup for text leaves
    pub text: Option<String>,

    pub attributes: Attributes,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag_name.to_ascii_lowercase(),
            text: None,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs.into_iter().collect();
        node
    }

    /// Create a new text node holding raw markup
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag: String::new(),
            text: Some(content.to_string()),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a document root node
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            tag: String::new(),
            text: None,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase, empty for non-elements)
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenated raw text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.text.clone().unwrap_or_default(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }

    /// Serialize this element's tag and attributes around already-rendered content.
    ///
    /// Used for pass-through of tags without a rule. Void elements with no
    /// content come out as a bare start tag. Non-elements return `inner`.
    pub fn outer_html_with(&self, inner: &str) -> String {
        if !self.is_element() {
            return inner.to_string();
        }

        let tag = self.tag_name();
        let attrs = self.attributes.to_html();
        let start = if attrs.is_empty() {
            format!("<{}>", tag)
        } else {
            format!("<{} {}>", tag, attrs)
        };

        if inner.is_empty() && is_void(tag) {
            start
        } else {
            format!("{}{}</{}>", start, inner, tag)
        }
    }
}

/// Encode quotes in a raw attribute value one level deeper than the rest.
///
/// The postprocessor decodes the whole output once; a quote must still be
/// `&quot;` afterwards or the serialized tag is cut short.
fn protect_quotes(raw: &str) -> String {
    raw.replace('"', "&quot;").replace("&quot;", "&amp;quot;")
}
