//! Document-level types.

use super::HtmlNode;
use serde::{Deserialize, Serialize};

/// A parsed Markdown document, ready to render.
///
/// The root is always a `div` parent node whose children are the per-block
/// nodes in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    root: HtmlNode,
}

impl Document {
    /// Wrap per-block nodes in the root `div`.
    pub fn from_blocks(blocks: Vec<HtmlNode>) -> Self {
        Self {
            root: HtmlNode::parent("div", blocks),
        }
    }

    /// The root node of the tree.
    pub fn root(&self) -> &HtmlNode {
        &self.root
    }

    /// Number of top-level block nodes.
    pub fn block_count(&self) -> usize {
        self.root.children().map_or(0, <[HtmlNode]>::len)
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::from_blocks(Vec::new());
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
        assert_eq!(doc.root().tag(), Some("div"));
    }

    #[test]
    fn test_block_count() {
        let doc = Document::from_blocks(vec![
            HtmlNode::parent("p", vec![HtmlNode::text("one")]),
            HtmlNode::parent("p", vec![HtmlNode::text("two")]),
        ]);
        assert_eq!(doc.block_count(), 2);
    }
}
