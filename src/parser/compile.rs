//! Block-to-tree compilation.
//!
//! Turns a classified block into its document-tree node, delegating inline
//! text to the tokenizer. Structured kinds re-validate their line prefixes
//! here even though the classifier already checked them; a failure at this
//! stage means the two disagree, but it surfaces as a catchable
//! [`Error::MalformedBlock`] rather than a panic.

use crate::error::{Error, Result};
use crate::model::HtmlNode;
use crate::parser::block::BlockKind;
use crate::parser::inline::tokenize;

/// Compile a single raw block according to its classified kind.
pub fn compile(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Paragraph => paragraph_node(block),
        BlockKind::Heading(level) => heading_node(block, level),
        BlockKind::Code => code_node(block),
        BlockKind::Quote => quote_node(block),
        BlockKind::UnorderedList => unordered_list_node(block),
        BlockKind::OrderedList => ordered_list_node(block),
    }
}

/// Tokenize inline text and map each span to its leaf node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.iter().map(HtmlNode::from).collect())
}

/// All lines joined with a single space, wrapped in `<p>`.
fn paragraph_node(block: &str) -> Result<HtmlNode> {
    let paragraph = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&paragraph)?))
}

/// Text after the `#` marker, wrapped in `<h1>`-`<h6>`.
fn heading_node(block: &str, level: u8) -> Result<HtmlNode> {
    // Marker is `level` hashes plus one space, all ASCII.
    let text = strip_chars(block, level as usize + 1);
    if text.is_empty() {
        return Err(Error::MalformedBlock {
            kind: "heading",
            reason: format!("h{level} has no text"),
        });
    }
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

/// Fence-stripped body as a raw leaf inside `<pre><code>`.
///
/// The body is the block verbatim minus the leading fence plus its newline
/// (four characters) and the trailing fence (three characters). The inline
/// tokenizer is deliberately not invoked: code contents render unchanged,
/// including literal `_`, `*`, and backtick characters.
fn code_node(block: &str) -> Result<HtmlNode> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(Error::MalformedBlock {
            kind: "code",
            reason: "missing opening or closing fence".to_string(),
        });
    }
    let body = HtmlNode::text(code_body(block));
    let code = HtmlNode::parent("code", vec![body]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

/// The block with its first four and last three characters removed, empty
/// when the fences overlap (e.g. a single six-backtick line).
fn code_body(block: &str) -> &str {
    let start = match block.char_indices().nth(4) {
        Some((offset, _)) => offset,
        None => return "",
    };
    let end = match block.char_indices().rev().nth(2) {
        Some((offset, _)) => offset,
        None => return "",
    };
    if start < end {
        &block[start..end]
    } else {
        ""
    }
}

/// Per-line `>` markers stripped, lines joined with a single space, wrapped
/// in `<blockquote>`.
fn quote_node(block: &str) -> Result<HtmlNode> {
    let mut stripped = Vec::new();
    for line in block.lines() {
        if !line.starts_with('>') {
            return Err(Error::MalformedBlock {
                kind: "quote",
                reason: format!("line {line:?} does not start with '>'"),
            });
        }
        stripped.push(line.trim_start_matches('>').trim());
    }
    let text = stripped.join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

/// One `<li>` per `- ` line, wrapped in `<ul>`.
fn unordered_list_node(block: &str) -> Result<HtmlNode> {
    let mut items = Vec::new();
    for line in block.lines() {
        if !line.starts_with('-') {
            return Err(Error::MalformedBlock {
                kind: "unordered list",
                reason: format!("line {line:?} does not start with '-'"),
            });
        }
        items.push(HtmlNode::parent(
            "li",
            text_to_children(strip_chars(line, 2))?,
        ));
    }
    Ok(HtmlNode::parent("ul", items))
}

/// One `<li>` per numbered line, wrapped in `<ol>`.
///
/// Strips the exact `"{n}. "` prefix that the classifier validated, so items
/// past 9 keep their full text.
fn ordered_list_node(block: &str) -> Result<HtmlNode> {
    let mut items = Vec::new();
    for (line, number) in block.lines().zip(1u32..) {
        let prefix = format!("{number}. ");
        let text = line.strip_prefix(&prefix).ok_or_else(|| Error::MalformedBlock {
            kind: "ordered list",
            reason: format!("line {line:?} does not start with {prefix:?}"),
        })?;
        items.push(HtmlNode::parent("li", text_to_children(text)?));
    }
    Ok(HtmlNode::parent("ol", items))
}

/// The line with its first `count` characters removed.
fn strip_chars(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &line[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineSpan;

    #[test]
    fn test_paragraph_joins_lines() {
        let node = compile("line one\nline two", BlockKind::Paragraph).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("p", vec![HtmlNode::text("line one line two")])
        );
    }

    #[test]
    fn test_paragraph_with_inline_styles() {
        let node = compile("some **bold** text", BlockKind::Paragraph).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "p",
                vec![
                    HtmlNode::text("some "),
                    HtmlNode::leaf("b", "bold"),
                    HtmlNode::text(" text"),
                ]
            )
        );
    }

    #[test]
    fn test_heading_levels() {
        let node = compile("# Title", BlockKind::Heading(1)).unwrap();
        assert_eq!(node, HtmlNode::parent("h1", vec![HtmlNode::text("Title")]));

        let node = compile("### Deep", BlockKind::Heading(3)).unwrap();
        assert_eq!(node, HtmlNode::parent("h3", vec![HtmlNode::text("Deep")]));
    }

    #[test]
    fn test_heading_without_text_fails() {
        let err = compile("# ", BlockKind::Heading(1)).unwrap_err();
        assert!(matches!(err, Error::MalformedBlock { kind: "heading", .. }));
    }

    #[test]
    fn test_code_block_keeps_body_verbatim() {
        let node = compile("```\nlet _x_ = 1;\n```", BlockKind::Code).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "pre",
                vec![HtmlNode::parent(
                    "code",
                    vec![HtmlNode::text("let _x_ = 1;\n")]
                )]
            )
        );
    }

    #[test]
    fn test_empty_code_block() {
        let node = compile("``````", BlockKind::Code).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("pre", vec![HtmlNode::parent("code", vec![HtmlNode::text("")])])
        );
    }

    #[test]
    fn test_code_block_without_fence_fails() {
        let err = compile("plain text", BlockKind::Code).unwrap_err();
        assert!(matches!(err, Error::MalformedBlock { kind: "code", .. }));
    }

    #[test]
    fn test_quote_strips_markers_and_joins() {
        let node = compile("> first\n> second", BlockKind::Quote).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("blockquote", vec![HtmlNode::text("first second")])
        );
    }

    #[test]
    fn test_quote_flattens_deep_markers() {
        let node = compile(">> deep", BlockKind::Quote).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent("blockquote", vec![HtmlNode::text("deep")])
        );
    }

    #[test]
    fn test_unordered_list() {
        let node = compile("- a\n- b", BlockKind::UnorderedList).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "ul",
                vec![
                    HtmlNode::parent("li", vec![HtmlNode::text("a")]),
                    HtmlNode::parent("li", vec![HtmlNode::text("b")]),
                ]
            )
        );
    }

    #[test]
    fn test_unordered_list_bad_line_fails() {
        let err = compile("- a\nb", BlockKind::UnorderedList).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBlock {
                kind: "unordered list",
                ..
            }
        ));
    }

    #[test]
    fn test_ordered_list() {
        let node = compile("1. a\n2. b\n3. c", BlockKind::OrderedList).unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "ol",
                vec![
                    HtmlNode::parent("li", vec![HtmlNode::text("a")]),
                    HtmlNode::parent("li", vec![HtmlNode::text("b")]),
                    HtmlNode::parent("li", vec![HtmlNode::text("c")]),
                ]
            )
        );
    }

    #[test]
    fn test_ordered_list_double_digit_items() {
        let block = (1..=10)
            .map(|n| format!("{n}. item {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let node = compile(&block, BlockKind::OrderedList).unwrap();
        let children = node.children().unwrap();
        assert_eq!(children.len(), 10);
        assert_eq!(
            children[9],
            HtmlNode::parent("li", vec![HtmlNode::text("item 10")])
        );
    }

    #[test]
    fn test_ordered_list_out_of_sequence_fails() {
        let err = compile("1. a\n3. b", BlockKind::OrderedList).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBlock {
                kind: "ordered list",
                ..
            }
        ));
    }

    #[test]
    fn test_list_items_parse_inline() {
        let node = compile("- plain\n- **bold**", BlockKind::UnorderedList).unwrap();
        let children = node.children().unwrap();
        assert_eq!(
            children[1],
            HtmlNode::parent("li", vec![HtmlNode::from(&InlineSpan::Bold("bold".to_string()))])
        );
    }

    #[test]
    fn test_unbalanced_delimiter_propagates() {
        let err = compile("broken `code", BlockKind::Paragraph).unwrap_err();
        assert!(matches!(err, Error::UnbalancedDelimiter { .. }));
    }
}
