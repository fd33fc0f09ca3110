//! Boundary normalization for caller-supplied children.
//!
//! The host framework lets callers express children as a single node, an
//! array, nested arrays, or nothing at all. [`ChildSource`] is the one place
//! that dynamic shape is accepted; [`ChildSource::normalize`] flattens it
//! into the ordered `Vec<Node>` the traversal code consumes, so the core
//! never inspects shape at runtime.
//!
//! # Example
//!
//! ```rust
//! use elemtree_ast::{ChildSource, Node};
//!
//! let source = ChildSource::Many(vec![
//!     Node::new_text("a").into(),
//!     ChildSource::None,
//!     ChildSource::Many(vec![Node::new_text("b").into(), Node::new_text("c").into()]),
//! ]);
//!
//! let children = source.normalize();
//! let texts: Vec<_> = children.iter().filter_map(Node::text).collect();
//! assert_eq!(texts, vec!["a", "b", "c"]);
//! ```

use crate::{Element, Node};

/// A caller-supplied children value before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChildSource {
    /// No child (an omitted or sparse entry). Dropped by normalization.
    #[default]
    None,
    /// A single node.
    Node(Node),
    /// An ordered sequence of sources, possibly nested.
    Many(Vec<ChildSource>),
}

impl ChildSource {
    /// Flattens this source into an ordered child sequence.
    ///
    /// Nested sequences are flattened depth-first, preserving document
    /// order; `None` entries are dropped.
    pub fn normalize(self) -> Vec<Node> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(self, out: &mut Vec<Node>) {
        match self {
            Self::None => {}
            Self::Node(node) => out.push(node),
            Self::Many(sources) => {
                for source in sources {
                    source.collect_into(out);
                }
            }
        }
    }
}

impl From<Node> for ChildSource {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for ChildSource {
    fn from(element: Element) -> Self {
        Self::Node(Node::Element(element))
    }
}

impl From<&str> for ChildSource {
    fn from(text: &str) -> Self {
        Self::Node(Node::new_text(text))
    }
}

impl From<String> for ChildSource {
    fn from(text: String) -> Self {
        Self::Node(Node::Text(text))
    }
}

impl<T: Into<ChildSource>> From<Option<T>> for ChildSource {
    fn from(source: Option<T>) -> Self {
        match source {
            Some(value) => value.into(),
            None => Self::None,
        }
    }
}

impl<T: Into<ChildSource>> From<Vec<T>> for ChildSource {
    fn from(sources: Vec<T>) -> Self {
        Self::Many(sources.into_iter().map(Into::into).collect())
    }
}
