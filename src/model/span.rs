//! Inline span types.

use serde::{Deserialize, Serialize};

/// A typed unit of inline content within a block.
///
/// Spans are produced by the inline tokenizer and consumed immediately by
/// tree construction; they are never mutated after creation. Only `Link` and
/// `Image` carry a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain, unstyled text.
    Plain(String),

    /// Bold text (`**bold**`).
    Bold(String),

    /// Italic text (`_italic_`).
    Italic(String),

    /// Inline code (`` `code` ``).
    Code(String),

    /// A hyperlink (`[text](url)`).
    Link {
        /// Anchor text
        text: String,
        /// Link target
        url: String,
    },

    /// An inline image (`![alt](url)`).
    Image {
        /// Alternative text
        alt: String,
        /// Image source
        url: String,
    },
}

impl InlineSpan {
    /// Create a plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan::Plain(text.into())
    }

    /// Check whether this span is still plain text (eligible for further
    /// delimiter splitting).
    pub fn is_plain(&self) -> bool {
        matches!(self, InlineSpan::Plain(_))
    }

    /// The visible text of the span (alt text for images).
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text)
            | InlineSpan::Bold(text)
            | InlineSpan::Italic(text)
            | InlineSpan::Code(text) => text,
            InlineSpan::Link { text, .. } => text,
            InlineSpan::Image { alt, .. } => alt,
        }
    }

    /// The URL carried by the span, if any. Only `Link` and `Image` spans
    /// carry one.
    pub fn url(&self) -> Option<&str> {
        match self {
            InlineSpan::Link { url, .. } | InlineSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}
