//! Rendering module for serializing document trees.

mod html;
mod json;

pub use html::{render_node, to_html};
pub use json::{to_json, JsonFormat};
