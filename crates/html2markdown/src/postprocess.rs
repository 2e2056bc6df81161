//! Entity decoding and whitespace normalization of rewritten Markdown.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// A whitespace-only run between two line breaks
static WHITESPACE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s+\n").unwrap());

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

static EMPTY_QUOTE_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:> \n){2,}").unwrap());

static LEADING_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:[ \t]*\n)+").unwrap());

static TRAILING_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\n[ \t]*)+\z").unwrap());

/// Decode HTML entities, then normalize whitespace.
///
/// Rules operate on entity-encoded content, so decoding has to wait until
/// the whole tree is rewritten.
pub fn postprocess(markdown: &str) -> String {
    let decoded = html_escape::decode_html_entities(markdown);
    collapse_whitespace(&decoded)
}

/// Normalize blank lines.
///
/// - whitespace-only lines between line breaks become a single blank line
/// - three or more line breaks become two
/// - repeated empty blockquote lines (`"> "`) become one
/// - blank lines at the very start and end are removed
///
/// The passes repeat until nothing changes, so the result is a fixpoint and
/// applying this function again returns it unchanged. Every pass only
/// removes text, which bounds the loop.
pub fn collapse_whitespace(markdown: &str) -> String {
    let mut current = markdown.to_string();
    loop {
        let next = collapse_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn collapse_once(markdown: &str) -> String {
    let text = WHITESPACE_LINE.replace_all(markdown, "\n\n");
    let text = replace(text, &EXCESS_NEWLINES, "\n\n");
    let text = replace(text, &EMPTY_QUOTE_LINES, "> \n");
    let text = replace(text, &LEADING_BLANK_LINES, "");
    let text = replace(text, &TRAILING_BLANK_LINES, "");
    text.into_owned()
}

fn replace<'a>(text: Cow<'a, str>, pattern: &Regex, with: &str) -> Cow<'a, str> {
    if pattern.is_match(&text) {
        Cow::Owned(pattern.replace_all(&text, with).into_owned())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_entities() {
        assert_eq!(postprocess("a &amp; b &lt;c&gt; &quot;d&quot; &#169;"), "a & b <c> \"d\" ©");
    }

    #[test]
    fn test_whitespace_line_between_breaks() {
        assert_eq!(collapse_whitespace("a\n   \nb"), "a\n\nb");
        assert_eq!(collapse_whitespace("a\n\n \t \n\nb"), "a\n\nb");
    }

    #[test]
    fn test_excess_newlines() {
        assert_eq!(collapse_whitespace("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_whitespace("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_whitespace("a\nb"), "a\nb");
    }

    #[test]
    fn test_empty_quote_lines() {
        assert_eq!(collapse_whitespace("> a\n> \n> \n> \n> b"), "> a\n> \n> b");
    }

    #[test]
    fn test_trims_edges_but_keeps_indentation() {
        assert_eq!(collapse_whitespace("\n\n# Title\n\n"), "# Title");
        assert_eq!(collapse_whitespace("\n \n\n    code\n\n"), "    code");
        assert_eq!(collapse_whitespace("text  \n"), "text  ");
    }

    #[test]
    fn test_keeps_code_indentation_after_blank_line() {
        assert_eq!(
            collapse_whitespace("intro\n\n    line1\n        line2\n\nafter"),
            "intro\n\n    line1\n        line2\n\nafter"
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "\n",
            "  \n \n",
            "\n\na\n \n \n\n\nb\n> \n> \n\n> c\n\n\n",
            "x\n\t\n\n\n    y\n \n",
            "> \n> \n> \n",
        ];
        for input in inputs {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once, "input: {:?}", input);
        }
    }
}
