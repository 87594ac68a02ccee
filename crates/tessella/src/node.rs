//! Virtual node model handed to and produced by the layout.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use tessella_core::ColumnItem;

use crate::style::Declarations;

/// A node in the virtual tree.
#[derive(Debug, Clone)]
pub struct VNode {
    /// Node type and content
    pub kind: NodeKind,
    /// Render key for keyed diffing
    pub key: Option<CompactString>,
    /// Class attribute
    pub class: Option<CompactString>,
    /// Plain attributes
    pub attrs: FxHashMap<CompactString, CompactString>,
    /// Inline style declarations
    pub style: Declarations,
    /// Child nodes
    pub children: Vec<VNode>,
}

impl VNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            class: None,
            attrs: FxHashMap::default(),
            style: Declarations::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node.
    pub fn element(tag: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::Element(tag.into()))
    }

    /// Create a text node.
    pub fn text(content: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::Comment(content.into()))
    }

    /// Set the render key.
    pub fn with_key(mut self, key: impl Into<CompactString>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the class attribute.
    pub fn with_class(mut self, class: impl Into<CompactString>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set a plain attribute.
    pub fn with_attr(
        mut self,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// The element tag, if this is an element node.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            _ => None,
        }
    }

    /// Whether this node renders as an element.
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }
}

/// Node type variants.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An element with a tag name
    Element(CompactString),
    /// Raw text content
    Text(CompactString),
    /// A comment node
    Comment(CompactString),
}

impl ColumnItem for VNode {
    fn is_renderable(&self) -> bool {
        self.is_element()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
