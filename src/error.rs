//! Error types for the mdsite library.

use std::io;
use thiserror::Error;

/// Result type alias for mdsite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during Markdown parsing, rendering, and site
/// generation.
#[derive(Error, Debug)]
pub enum Error {
    /// An inline styling delimiter appears an odd number of times within a
    /// plain text span, so the style run is never closed.
    #[error("unbalanced {delimiter:?} delimiter in {text:?}")]
    UnbalancedDelimiter {
        /// The delimiter that failed the balance check (`**`, `_`, or `` ` ``).
        delimiter: &'static str,
        /// The plain text span the check ran against.
        text: String,
    },

    /// A block failed re-validation during compilation after the classifier
    /// had already accepted it. Indicates a bug between the two stages.
    #[error("malformed {kind} block: {reason}")]
    MalformedBlock {
        /// Block category name ("heading", "unordered list", ...).
        kind: &'static str,
        /// What the re-validation found.
        reason: String,
    },

    /// The document tree is not renderable (a parent without a tag or
    /// children, or a leaf without a value).
    #[error("invalid HTML tree: {0}")]
    InvalidTree(String),

    /// No level-1 heading line was found to use as the page title.
    #[error("no h1 title found in markdown")]
    MissingTitle,

    /// A source path handed to the site generator does not exist.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the document tree to JSON.
    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),
}
