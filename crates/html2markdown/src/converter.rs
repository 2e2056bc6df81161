//! Converter - the main entry point for HTML to Markdown conversion.

#[cfg(feature = "html")]
use std::fs;
#[cfg(feature = "html")]
use std::path::Path;
use std::sync::Arc;

use crate::node::Node;
use crate::postprocess::postprocess;
use crate::rewrite::TreeRewriter;
use crate::rules::Scheme;
#[cfg(feature = "html")]
use crate::{Error, Result};

/// Converts HTML to Markdown using a fixed [`Scheme`].
///
/// A converter never mutates its scheme, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    scheme: Arc<Scheme>,
}

impl Converter {
    /// Create a converter with the default scheme
    pub fn new() -> Self {
        Self {
            scheme: Scheme::shared_default(),
        }
    }

    /// Create a converter whose scheme replaces the default one entirely
    pub fn with_scheme(scheme: Scheme) -> Self {
        Self {
            scheme: Arc::new(scheme),
        }
    }

    /// Get the scheme in use
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Convert an HTML string to Markdown
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> String {
        let cleaned = crate::preprocess::preprocess(html);
        let document = crate::html::parse_html(&cleaned);
        let markdown = self.convert_node(&document);

        log::debug!(
            "converted {} bytes of HTML to {} bytes of Markdown",
            html.len(),
            markdown.len()
        );
        markdown
    }

    /// Convert an already-built [`Node`] tree to Markdown
    pub fn convert_node(&self, node: &Node) -> String {
        let rewritten = TreeRewriter::new(&self.scheme).rewrite(node);
        postprocess(&rewritten)
    }

    /// Read an HTML file and convert it to Markdown.
    ///
    /// Line endings are normalized to `\n` before conversion.
    #[cfg(feature = "html")]
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let html = String::from_utf8(bytes).map_err(|e| {
            Error::InvalidInput(format!("{} is not valid UTF-8: {}", path.display(), e))
        })?;

        log::debug!("converting {}", path.display());
        Ok(self.convert(&normalize_line_endings(&html)))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "html")]
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
