//! JSON serialization of the document tree.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize the document tree to JSON.
pub fn to_json(document: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(document)?,
        JsonFormat::Compact => serde_json::to_string(document)?,
    };
    Ok(json)
}
