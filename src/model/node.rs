//! Document tree node types.

use super::InlineSpan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTML attributes as an attribute-name to value mapping.
///
/// A `BTreeMap` keeps iteration order stable across repeated renders of the
/// same node.
pub type Attrs = BTreeMap<String, String>;

/// A node in the output document tree.
///
/// The two shapes are disjoint: a `Leaf` carries literal text and no
/// children, a `Parent` carries children and no text. Presence of the
/// optional fields is validated when the node is rendered, not when it is
/// constructed, so a partially built node is representable but never reaches
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HtmlNode {
    /// A text-bearing node with no children. Renders as raw text when `tag`
    /// is `None`, otherwise as `<tag attrs>value</tag>`.
    Leaf {
        /// HTML tag name, or `None` for raw text
        tag: Option<String>,
        /// Literal text content; required at render time
        value: Option<String>,
        /// HTML attributes
        attrs: Attrs,
    },

    /// An element with children and no text of its own. Renders as
    /// `<tag attrs>`, each child in order, then `</tag>`.
    Parent {
        /// HTML tag name; required at render time
        tag: Option<String>,
        /// Child nodes, owned exclusively by this parent. `Some(vec![])`
        /// renders an empty tag pair; `None` is a render-time error.
        children: Option<Vec<HtmlNode>>,
        /// HTML attributes
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// Create a raw text leaf (no tag, renders as its value verbatim).
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    /// Create a tagged leaf node.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    /// Create a tagged leaf node with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs,
        }
    }

    /// Create a parent node.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Attrs::new(),
        }
    }

    /// The node's tag name, if set.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// The node's attributes.
    pub fn attrs(&self) -> &Attrs {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Child nodes for parents, `None` for leaves or never-set children.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Parent { children, .. } => children.as_deref(),
            HtmlNode::Leaf { .. } => None,
        }
    }
}

impl From<&InlineSpan> for HtmlNode {
    /// Map an inline span to its leaf node form.
    ///
    /// Plain text becomes an untagged leaf, styled text gets its tag, links
    /// carry `href`, and images carry `src`/`alt` with an empty value.
    fn from(span: &InlineSpan) -> Self {
        match span {
            InlineSpan::Plain(text) => HtmlNode::text(text.clone()),
            InlineSpan::Bold(text) => HtmlNode::leaf("b", text.clone()),
            InlineSpan::Italic(text) => HtmlNode::leaf("i", text.clone()),
            InlineSpan::Code(text) => HtmlNode::leaf("code", text.clone()),
            InlineSpan::Link { text, url } => {
                let mut attrs = Attrs::new();
                attrs.insert("href".to_string(), url.clone());
                HtmlNode::leaf_with_attrs("a", text.clone(), attrs)
            }
            InlineSpan::Image { alt, url } => {
                let mut attrs = Attrs::new();
                attrs.insert("src".to_string(), url.clone());
                attrs.insert("alt".to_string(), alt.clone());
                HtmlNode::leaf_with_attrs("img", "", attrs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf() {
        let node = HtmlNode::text("raw");
        assert_eq!(node.tag(), None);
        assert!(node.attrs().is_empty());
        assert_eq!(node.children(), None);
    }

    #[test]
    fn test_parent_children() {
        let node = HtmlNode::parent("p", vec![HtmlNode::text("hi")]);
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.children().map(<[HtmlNode]>::len), Some(1));
    }

    #[test]
    fn test_span_to_node_plain() {
        let node = HtmlNode::from(&InlineSpan::plain("hello"));
        assert_eq!(node, HtmlNode::text("hello"));
    }

    #[test]
    fn test_span_to_node_link() {
        let span = InlineSpan::Link {
            text: "docs".to_string(),
            url: "https://example.com".to_string(),
        };
        let node = HtmlNode::from(&span);
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(
            node.attrs().get("href").map(String::as_str),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_span_to_node_image_has_empty_value() {
        let span = InlineSpan::Image {
            alt: "logo".to_string(),
            url: "/logo.png".to_string(),
        };
        match HtmlNode::from(&span) {
            HtmlNode::Leaf { tag, value, attrs } => {
                assert_eq!(tag.as_deref(), Some("img"));
                assert_eq!(value.as_deref(), Some(""));
                assert_eq!(attrs.get("src").map(String::as_str), Some("/logo.png"));
                assert_eq!(attrs.get("alt").map(String::as_str), Some("logo"));
            }
            HtmlNode::Parent { .. } => panic!("expected leaf"),
        }
    }
}
