//! # mdsite
//!
//! Markdown-to-HTML document conversion for Rust.
//!
//! This library parses a small, well-specified Markdown dialect into a typed
//! document tree and serializes that tree to HTML or JSON. A `site` module
//! layers static-site generation (templates, titles, directory walking,
//! asset copying) on top of the pure core.
//!
//! ## Quick Start
//!
//! ```
//! use mdsite::markdown_to_html;
//!
//! fn main() -> mdsite::Result<()> {
//!     let html = markdown_to_html("# Hi\n\nSome **bold** text.")?;
//!     assert_eq!(html, "<div><h1>Hi</h1><p>Some <b>bold</b> text.</p></div>");
//!     Ok(())
//! }
//! ```
//!
//! ## Dialect
//!
//! - **Blocks**: paragraphs, `#`-`######` headings, fenced code blocks,
//!   blockquotes, unordered (`- `) and strictly sequential ordered lists,
//!   separated by blank lines.
//! - **Inline**: `**bold**`, `_italic_`, `` `code` ``, `[links](url)`, and
//!   `![images](url)`. Nested emphasis is deliberately unsupported.
//!
//! The core is pure and synchronous: no I/O, no shared state, safe to call
//! concurrently across independent documents.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Attrs, Document, HtmlNode, InlineSpan};
pub use parser::{classify, parse_document, segment, tokenize, BlockKind};
pub use render::{to_html as render_to_html, to_json, JsonFormat};
pub use site::{extract_title, Template};

/// Convert a Markdown string straight to its HTML string.
///
/// Equivalent to [`parse_document`] followed by [`render_to_html`].
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let document = parse_document(markdown)?;
    render::to_html(&document)
}

/// Convert a Markdown string to a JSON rendering of its document tree.
pub fn markdown_to_json(markdown: &str, format: JsonFormat) -> Result<String> {
    let document = parse_document(markdown)?;
    render::to_json(&document, format)
}
