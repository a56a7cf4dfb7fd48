//! HTML serialization of the document tree.

use crate::error::{Error, Result};
use crate::model::{Attrs, Document, HtmlNode};

/// Render a parsed document to an HTML string.
///
/// Pure serialization; fails only with [`Error::InvalidTree`], and returns no
/// partial HTML on failure.
pub fn to_html(document: &Document) -> Result<String> {
    render_node(document.root())
}

/// Render a single node and its subtree, depth-first, pre-order.
///
/// A leaf without a value, or a parent without a tag or with never-set
/// children, fails validation here rather than at construction time. A
/// parent whose children were set to an empty sequence renders as an empty
/// tag pair.
pub fn render_node(node: &HtmlNode) -> Result<String> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            let value = value
                .as_ref()
                .ok_or_else(|| Error::InvalidTree("leaf node has no value".to_string()))?;
            match tag {
                None => Ok(value.clone()),
                Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", attrs_to_html(attrs))),
            }
        }
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            let tag = tag
                .as_ref()
                .ok_or_else(|| Error::InvalidTree("parent node has no tag".to_string()))?;
            let children = children.as_ref().ok_or_else(|| {
                Error::InvalidTree(format!("parent <{tag}> has no children"))
            })?;

            let mut html = format!("<{tag}{}>", attrs_to_html(attrs));
            for child in children {
                html.push_str(&render_node(child)?);
            }
            html.push_str("</");
            html.push_str(tag);
            html.push('>');
            Ok(html)
        }
    }
}

/// Attributes as ` name="value"` pairs, nothing when empty.
fn attrs_to_html(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}
