//! Data model for parsed documents.

mod document;
mod node;
mod span;

pub use document::Document;
pub use node::{Attrs, HtmlNode};
pub use span::InlineSpan;
