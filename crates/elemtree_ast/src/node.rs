//! Node definition.
//!
//! The core element tree node type used throughout elemtree.

use serde::Serialize;

/// A node in a UI element tree.
///
/// A node is either a text leaf or an element with an ordered sequence of
/// child nodes. Nodes are constructed and owned entirely by the caller;
/// the traversal functions in [`crate::traverse`] only ever borrow them.
///
/// # Example
///
/// ```rust
/// use elemtree_ast::Node;
///
/// let paragraph = Node::new_element("p", vec![Node::new_text("Hello")]);
///
/// assert!(paragraph.is_element());
/// assert!(paragraph.has_children());
/// assert_eq!(paragraph.children().map(<[Node]>::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal node holding only text content.
    Text(String),
    /// A node holding an ordered sequence of child nodes.
    Element(Element),
}

/// An element node: a tag plus an ordered child sequence.
///
/// The tag is opaque metadata as far as traversal is concerned; none of the
/// traversal or text operations inspect it. Insertion order of `children`
/// is traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element tag (e.g. `"p"`, `"h3"`). Not interpreted by traversal.
    pub tag: String,
    /// Child nodes, possibly empty.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates a new element with the given tag and children.
    #[inline]
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }
}

impl Node {
    /// Creates a new text leaf.
    #[inline]
    pub fn new_text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a new element node with children.
    #[inline]
    pub fn new_element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(Element::new(tag, children))
    }

    /// Returns true if this node is a text leaf.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if this node is an element.
    ///
    /// An element counts as a container regardless of whether its child
    /// sequence is empty; a text leaf never does.
    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns true if this node is an element with at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        matches!(self, Self::Element(element) if !element.children.is_empty())
    }

    /// Returns the text content of this node.
    ///
    /// For text leaves, returns the value. For elements, returns `None`
    /// (use `elemtree_text::flatten` to collect descendant text).
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Element(_) => None,
        }
    }

    /// Returns the ordered child sequence of this node.
    ///
    /// `Some` for every element, including ones with no children;
    /// `None` for text leaves.
    #[inline]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Text(_) => None,
            Self::Element(element) => Some(&element.children),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            // Text leaves serialize as bare strings, matching the host
            // framework's representation of string children.
            Self::Text(value) => serializer.serialize_str(value),
            Self::Element(element) => {
                let mut state = serializer.serialize_struct("Element", 2)?;
                state.serialize_field("tag", &element.tag)?;
                state.serialize_field("children", &element.children)?;
                state.end()
            }
        }
    }
}
