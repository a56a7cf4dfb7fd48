//! Markdown parsing module.
//!
//! The pipeline: document text → [`segment`] → raw blocks → [`classify`] →
//! [`BlockKind`] → [`compile`] (which calls [`tokenize`] for inline text) →
//! document-tree nodes, wrapped in the root `div`.

mod block;
mod compile;
mod inline;

pub use block::{classify, segment, BlockKind};
pub use compile::compile;
pub use inline::tokenize;

use crate::error::Result;
use crate::model::Document;

/// Parse a full Markdown document into a render-ready tree.
///
/// Performs no I/O. Any error aborts the whole document's parse; there is no
/// partial tree.
pub fn parse_document(markdown: &str) -> Result<Document> {
    let mut blocks = Vec::new();
    for raw_block in segment(markdown) {
        let kind = classify(raw_block);
        blocks.push(compile(raw_block, kind)?);
    }
    Ok(Document::from_blocks(blocks))
}
