//! Enclosing-list tracking for list item markers.

/// Kind of an HTML list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ol>`
    Ordered,
    /// `<ul>`
    Unordered,
}

impl ListKind {
    /// List kind for a tag name, `None` if the tag is not a list
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("ol") {
            Some(ListKind::Ordered)
        } else if tag.eq_ignore_ascii_case("ul") {
            Some(ListKind::Unordered)
        } else {
            None
        }
    }
}

/// Stack of the lists enclosing the node currently being rewritten.
///
/// Pushed on entering an `ol`/`ul`, popped on leaving it. The top is the
/// nearest enclosing list.
#[derive(Debug, Clone, Default)]
pub struct ListAncestry {
    stack: Vec<ListKind>,
}

impl ListAncestry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ListKind) {
        self.stack.push(kind);
    }

    pub fn pop(&mut self) -> Option<ListKind> {
        self.stack.pop()
    }

    /// Nearest enclosing list, if any
    pub fn nearest(&self) -> Option<ListKind> {
        self.stack.last().copied()
    }
}
