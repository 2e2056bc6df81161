//! Default tag rules.

use super::{Replacement, Rule, RuleContext, Scheme};
use crate::ancestry::ListKind;

const HR: &str = "* * *";
const INDENT: &str = "    ";

/// Build the default scheme
pub fn default_scheme() -> Scheme {
    Scheme::new()
        .with_rules(&["h1", "h2", "h3", "h4", "h5", "h6"], heading_rule())
        .with_rule("p", paragraph_rule())
        .with_rules(&["strong", "b"], strong_rule())
        .with_rules(&["em", "i"], emphasis_rule())
        .with_rule("br", line_break_rule())
        .with_rule("hr", horizontal_rule())
        .with_rule("a", anchor_rule())
        .with_rule("img", image_rule())
        .with_rule("blockquote", blockquote_rule())
        .with_rule("code", code_rule())
        .with_rule("pre", pre_rule())
        .with_rule("li", list_item_rule())
        .with_rules(&["ol", "ul"], list_rule())
        .with_rules(&["head", "html", "body"], Rule::unwrap())
        .with_rules(&["title", "meta", "link"], Rule::drop())
}

fn heading_rule() -> Rule {
    Rule::markdown(|ctx, content| {
        let level: usize = ctx.tag.get(1..).and_then(|n| n.parse().ok()).unwrap_or(1);
        format!("\n\n{} {}\n\n", "#".repeat(level), content)
    })
}

fn paragraph_rule() -> Rule {
    Rule::markdown(|_, content| format!("\n\n{}\n", content))
}

fn strong_rule() -> Rule {
    Rule::markdown(|_, content| format!("**{}**", content))
}

fn emphasis_rule() -> Rule {
    Rule::markdown(|_, content| format!("*{}*", content))
}

fn line_break_rule() -> Rule {
    Rule::markdown(|_, _| "  \n".to_string())
}

fn horizontal_rule() -> Rule {
    Rule::markdown(|_, _| format!("\n\n{}\n", HR))
}

/// Anchors are dropped only when both the text and the href are empty.
fn anchor_rule() -> Rule {
    Rule::new(|ctx, content| {
        let href = ctx.attr("href");
        if content.is_empty() && href.is_empty() {
            return Replacement::Drop;
        }
        Replacement::Markdown(format!("[{}]({}{})", content, href, title_clause(ctx)))
    })
}

fn image_rule() -> Rule {
    Rule::markdown(|ctx, _| {
        format!(
            "![{}]({}{})",
            ctx.attr("alt"),
            ctx.attr("src"),
            title_clause(ctx)
        )
    })
}

fn title_clause(ctx: &RuleContext<'_>) -> String {
    match ctx.attr("title") {
        "" => String::new(),
        title => format!(" \"{}\"", title),
    }
}

fn blockquote_rule() -> Rule {
    Rule::markdown(|_, content| {
        let mut lines: Vec<String> = content
            .trim_start()
            .split('\n')
            .map(|line| format!("> {}", line.trim_end()))
            .collect();

        while lines.last().is_some_and(|line| line.trim_end() == ">") {
            lines.pop();
        }

        let mut quoted = String::new();
        for line in &lines {
            quoted.push_str(line);
            quoted.push('\n');
        }

        format!("\n\n{}\n\n", quoted)
    })
}

fn code_rule() -> Rule {
    Rule::markdown(|_, content| {
        if !content.contains('\n') {
            return format!("`{}`", content);
        }
        format!("\n\n{}\n\n", indent_block(content).trim_end())
    })
}

fn pre_rule() -> Rule {
    Rule::markdown(|_, content| format!("\n\n{}\n\n", indent_block(content).trim_end()))
}

/// Expand tabs and indent every non-blank line by four spaces.
fn indent_block(content: &str) -> String {
    content
        .replace('\t', INDENT)
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_item_rule() -> Rule {
    Rule::markdown(|ctx, content| {
        let prefix = match ctx.list {
            Some(ListKind::Ordered) => "1.  ",
            Some(ListKind::Unordered) => "*   ",
            None => {
                log::trace!("list item outside of any list, using bullet marker");
                "*   "
            }
        };
        format!("\n{}{}", prefix, content)
    })
}

fn list_rule() -> Rule {
    Rule::markdown(|_, content| format!("\n{}", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attributes;

    fn apply(tag: &str, attrs: &[(&str, &str)], content: &str) -> String {
        apply_in(tag, attrs, content, None)
    }

    fn apply_in(tag: &str, attrs: &[(&str, &str)], content: &str, list: Option<ListKind>) -> String {
        let scheme = default_scheme();
        let attributes: Attributes = attrs.iter().copied().collect();
        let ctx = RuleContext::new(tag, &attributes, list);
        scheme
            .lookup(tag)
            .expect("default rule")
            .apply(&ctx, content)
    }

    #[test]
    fn test_headings_use_numeric_suffix() {
        assert_eq!(apply("h1", &[], "Title"), "\n\n# Title\n\n");
        assert_eq!(apply("h4", &[], "Deep"), "\n\n#### Deep\n\n");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(apply("p", &[], "text"), "\n\ntext\n");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(apply("strong", &[], "bold"), "**bold**");
        assert_eq!(apply("b", &[], "bold"), "**bold**");
        assert_eq!(apply("em", &[], "it"), "*it*");
        assert_eq!(apply("i", &[], "it"), "*it*");
    }

    #[test]
    fn test_breaks() {
        assert_eq!(apply("br", &[], ""), "  \n");
        assert_eq!(apply("hr", &[], ""), "\n\n* * *\n");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            apply("a", &[("href", "https://example.com")], "Link"),
            "[Link](https://example.com)"
        );
        assert_eq!(
            apply("a", &[("href", "/x"), ("title", "T")], "Link"),
            "[Link](/x \"T\")"
        );
        assert_eq!(apply("a", &[("title", "")], "Link"), "[Link]()");
    }

    #[test]
    fn test_empty_anchor_dropped_only_when_both_empty() {
        assert_eq!(apply("a", &[("href", "")], ""), "");
        assert_eq!(apply("a", &[], ""), "");
        assert_eq!(apply("a", &[("href", "/x")], ""), "[](/x)");
    }

    #[test]
    fn test_image() {
        assert_eq!(apply("img", &[("src", "x.png"), ("alt", "y")], ""), "![y](x.png)");
        assert_eq!(
            apply("img", &[("src", "x.png"), ("alt", "y"), ("title", "t")], ""),
            "![y](x.png \"t\")"
        );
        assert_eq!(apply("img", &[], ""), "![]()");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            apply("blockquote", &[], "\n\nQuote\n"),
            "\n\n> Quote\n\n\n"
        );
        assert_eq!(
            apply("blockquote", &[], "one  \ntwo\n\n\n"),
            "\n\n> one\n> two\n\n\n"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(apply("code", &[], "let x = 1;"), "`let x = 1;`");
    }

    #[test]
    fn test_multiline_code() {
        assert_eq!(
            apply("code", &[], "fn main() {\n\tbody();\n}\n"),
            "\n\n    fn main() {\n        body();\n    }\n\n"
        );
    }

    #[test]
    fn test_pre_always_block() {
        assert_eq!(apply("pre", &[], "single"), "\n\n    single\n\n");
        assert_eq!(
            apply("pre", &[], "line1\n\tline2"),
            "\n\n    line1\n        line2\n\n"
        );
    }

    #[test]
    fn test_whitespace_only_lines_in_blocks_become_empty() {
        assert_eq!(apply("pre", &[], "a\n \t \nb"), "\n\n    a\n\n    b\n\n");
        assert_eq!(apply("code", &[], "a\n    \nb"), "\n\n    a\n\n    b\n\n");
    }

    #[test]
    fn test_list_item_marker_follows_list_kind() {
        assert_eq!(apply_in("li", &[], "a", Some(ListKind::Ordered)), "\n1.  a");
        assert_eq!(apply_in("li", &[], "a", Some(ListKind::Unordered)), "\n*   a");
        assert_eq!(apply_in("li", &[], "a", None), "\n*   a");
    }

    #[test]
    fn test_lists_and_structure() {
        assert_eq!(apply("ul", &[], "\n*   a"), "\n\n*   a");
        assert_eq!(apply("body", &[], "keep"), "keep");
        assert_eq!(apply("html", &[], "keep"), "keep");
        assert_eq!(apply("title", &[], "gone"), "");
        assert_eq!(apply("meta", &[], ""), "");
    }
}
