//! Block segmentation and classification.
//!
//! A block is a maximal document fragment delimited by blank lines, before
//! any inline parsing. The classifier assigns each block exactly one
//! grammatical category; the rules are checked in priority order, so no
//! block can match two categories.

/// Grammatical category of a raw Markdown block.
///
/// Computed once per block and consumed by the compiler; not retained in the
/// output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Free text; the fallback for anything that matches no other rule.
    Paragraph,
    /// `# ` through `###### ` heading, with its level (1-6).
    Heading(u8),
    /// Fenced code block (starts and ends with three backticks).
    Code,
    /// Blockquote (every line starts with `>`).
    Quote,
    /// Unordered list (every line starts with `- `).
    UnorderedList,
    /// Ordered list (lines numbered `1. `, `2. `, ... with no gaps).
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by the literal two-character blank-line boundary
/// `"\n\n"`. Fragments that are empty after trimming are dropped, so an
/// all-whitespace document yields no blocks. Order is preserved. Any input
/// is acceptable; segmentation cannot fail.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block, assumed already trimmed.
pub fn classify(block: &str) -> BlockKind {
    // 1-6 '#' characters immediately followed by a space. Seven or more do
    // not qualify.
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }

    if block.starts_with('>') {
        if block.lines().all(|line| line.starts_with('>')) {
            return BlockKind::Quote;
        }
        return BlockKind::Paragraph;
    }

    if block.starts_with("- ") {
        if block.lines().all(|line| line.starts_with("- ")) {
            return BlockKind::UnorderedList;
        }
        return BlockKind::Paragraph;
    }

    if block.starts_with("1. ") {
        if is_sequential_list(block) {
            return BlockKind::OrderedList;
        }
        return BlockKind::Paragraph;
    }

    BlockKind::Paragraph
}

/// Heading level (1-6) if the block starts with that many `#` characters
/// followed by a single space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Check that every line is numbered sequentially from 1 with no gaps.
fn is_sequential_list(block: &str) -> bool {
    block
        .lines()
        .zip(1u32..)
        .all(|(line, number)| line.starts_with(&format!("{number}. ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_preserves_order_and_trims() {
        let blocks = segment("first\n\n  second  \n\nthird");
        assert_eq!(blocks, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_segment_drops_empty_fragments() {
        let blocks = segment("first\n\n\n\n\nsecond");
        assert_eq!(blocks, vec!["first", "second"]);
    }

    #[test]
    fn test_segment_whitespace_only_document() {
        assert!(segment("").is_empty());
        assert!(segment("  \n\n \t \n\n   ").is_empty());
    }

    #[test]
    fn test_segment_keeps_inline_newlines() {
        let blocks = segment("- a\n- b\n\npara");
        assert_eq!(blocks, vec!["- a\n- b", "para"]);
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("# Title"), BlockKind::Heading(1));
        assert_eq!(classify("### Title"), BlockKind::Heading(3));
        assert_eq!(classify("###### Title"), BlockKind::Heading(6));
    }

    #[test]
    fn test_classify_seven_hashes_is_paragraph() {
        assert_eq!(classify("####### Title"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_hash_without_space_is_paragraph() {
        assert_eq!(classify("#Title"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify("```\ncode\n```"), BlockKind::Code);
        // Empty one-line fence still counts as code.
        assert_eq!(classify("``````"), BlockKind::Code);
    }

    #[test]
    fn test_classify_unterminated_code_is_paragraph() {
        assert_eq!(classify("```\ncode"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify("> one\n> two"), BlockKind::Quote);
    }

    #[test]
    fn test_classify_quote_with_bad_line_is_paragraph() {
        assert_eq!(classify("> one\ntwo"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("- a\n- b"), BlockKind::UnorderedList);
        assert_eq!(classify("- a\nb"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
    }

    #[test]
    fn test_classify_ordered_list_gap_is_paragraph() {
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_not_starting_at_one() {
        assert_eq!(classify("2. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_double_digits() {
        let block = (1..=11)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn test_classify_paragraph_default() {
        assert_eq!(classify("just some text"), BlockKind::Paragraph);
    }
}
