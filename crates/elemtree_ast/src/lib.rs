//! # elemtree_ast
//!
//! Node types for elemtree, a set of helpers for working with the nested
//! child structure of a declarative UI element tree.
//!
//! The dynamic "children can be a single node, an array, nested arrays, or
//! omitted" shape of the source framework is replaced by an explicit tagged
//! union: a [`Node`] is either a text leaf or an [`Element`] with an ordered
//! child sequence. The shape is resolved once at the tree boundary via
//! [`ChildSource`]; traversal code only ever sees `&[Node]`.
//!
//! ## Example
//!
//! ```rust
//! use elemtree_ast::Node;
//!
//! let children = vec![
//!     Node::new_element("p", vec![Node::new_text("Foo")]),
//!     Node::new_element("p", vec![Node::new_text("Bar")]),
//! ];
//!
//! let mut texts = Vec::new();
//! elemtree_ast::traverse::for_each_deep(&children, |child, _index, _depth| {
//!     if let Some(text) = child.text() {
//!         texts.push(text.to_owned());
//!     }
//! });
//! assert_eq!(texts, vec!["Foo", "Bar"]);
//! ```

mod children;
mod node;
pub mod traverse;

pub use children::ChildSource;
pub use node::{Element, Node};

// Re-export the traversal entry points for convenience
pub use traverse::{filter, for_each_deep, reduce, try_for_each_deep};
