use conform_traits::{CategorySet, ElementDescriptor};
use markup5ever::LocalName;

/// A single attribute on an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: LocalName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: LocalName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A node in a candidate document tree.
///
/// Trees are built bottom-up (children before parents) and are immutable
/// once built: validation and serialization only ever borrow them. There
/// are no upward references, so a tree is strictly downward-owned and
/// acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A text node.
    Text(TextNodeData),
    /// An element with attributes and ordered children.
    Element(ElementNodeData),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNodeData::new(content.into()))
    }

    pub fn element(descriptor: &'static ElementDescriptor, children: Vec<Node>) -> Self {
        Node::Element(ElementNodeData {
            descriptor,
            attrs: Vec::new(),
            children,
        })
    }

    pub fn element_with_attrs(
        descriptor: &'static ElementDescriptor,
        attrs: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element(ElementNodeData {
            descriptor,
            attrs,
            children,
        })
    }

    pub fn downcast_element(&self) -> Option<&ElementNodeData> {
        match self {
            Node::Element(data) => Some(data),
            Node::Text(_) => None,
        }
    }

    pub fn downcast_text(&self) -> Option<&TextNodeData> {
        match self {
            Node::Text(data) => Some(data),
            Node::Element(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The node's tag name, or `None` for text nodes.
    pub fn tag(&self) -> Option<&LocalName> {
        self.downcast_element().map(|el| &el.descriptor.tag)
    }

    /// The categories the node belongs to when judged as a child.
    /// Text nodes have none.
    pub fn categories(&self) -> CategorySet {
        match self {
            Node::Element(data) => data.descriptor.categories,
            Node::Text(_) => CategorySet::empty(),
        }
    }
}

/// Element-specific node data.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNodeData {
    /// The element kind, borrowed from the element catalog.
    pub descriptor: &'static ElementDescriptor,
    /// The element's attributes.
    pub attrs: Vec<Attribute>,
    /// The element's children, in document order.
    pub children: Vec<Node>,
}

impl ElementNodeData {
    /// The value of the attribute with the given name, if set.
    pub fn attr(&self, name: LocalName) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &*attr.value)
    }

    /// Whether the (boolean) attribute with the given name is present.
    pub fn has_attr(&self, name: LocalName) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// The concatenation of the element's direct text children.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text(data) = child {
                out.push_str(&data.content);
            }
        }
        out
    }
}

/// Text-specific node data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNodeData {
    /// The textual content of the text node.
    pub content: String,
}

impl TextNodeData {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Whether this node is inter-element whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.content.chars().all(|c| c.is_ascii_whitespace())
    }
}

/// A pre-order traverser over a node subtree.
#[derive(Clone)]
pub struct TreeTraverser<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> TreeTraverser<'a> {
    /// Creates a new tree traverser which starts at the given root node.
    pub fn new(root: &'a Node) -> Self {
        let mut stack = Vec::with_capacity(32);
        stack.push(root);
        TreeTraverser { stack }
    }
}

impl<'a> Iterator for TreeTraverser<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(data) = node {
            self.stack.extend(data.children.iter().rev());
        }
        Some(node)
    }
}
