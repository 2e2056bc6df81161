//! Raw HTML cleanup before parsing.

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy so that `-` and `--` inside a comment never end it early.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());

static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>").unwrap());

/// Strip HTML comments and DOCTYPE declarations.
///
/// An unterminated `<!--` is left in place for the parser to deal with.
pub fn preprocess(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, "");
    DOCTYPE.replace_all(&without_comments, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comment() {
        assert_eq!(preprocess("a<!-- note -->b"), "ab");
    }

    #[test]
    fn test_comment_with_dashes() {
        assert_eq!(preprocess("a<!-- x - y -- z -->b"), "ab");
        assert_eq!(preprocess("<!---->a<!-- - -->"), "a");
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(preprocess("<p>a</p>\n<!--\nline\n-->\n<p>b</p>"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_comments_are_not_merged() {
        assert_eq!(preprocess("<!-- a -->keep<!-- b -->"), "keep");
    }

    #[test]
    fn test_strips_doctype() {
        assert_eq!(preprocess("<!DOCTYPE html><p>x</p>"), "<p>x</p>");
        assert_eq!(preprocess("<!doctype html>\n<p>x</p>"), "\n<p>x</p>");
    }

    #[test]
    fn test_unterminated_comment_untouched() {
        assert_eq!(preprocess("a<!-- open"), "a<!-- open");
    }
}
