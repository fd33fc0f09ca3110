//! Traversal helpers for element tree children.
//!
//! All helpers operate on a `&[Node]` children slice, mirroring the source
//! API which works on an element's children rather than the element itself.
//!
//! # Overview
//!
//! - [`for_each_deep`] - pre-order depth-first walk of a whole subtree
//! - [`try_for_each_deep`] - same walk with `ControlFlow` early termination
//! - [`filter`] - shallow filter over immediate children
//! - [`reduce`] - shallow left fold over immediate children
//!
//! # Examples
//!
//! ## Counting nodes at each depth
//!
//! ```rust
//! use elemtree_ast::{Node, traverse};
//!
//! let children = vec![
//!     Node::new_element("p", vec![Node::new_text("Foo")]),
//!     Node::new_element("p", vec![Node::new_text("Bar")]),
//! ];
//!
//! let mut max_depth = 0;
//! traverse::for_each_deep(&children, |_child, _index, depth| {
//!     max_depth = max_depth.max(depth);
//! });
//! assert_eq!(max_depth, 2);
//! ```
//!
//! ## Early termination
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use elemtree_ast::{Node, traverse};
//!
//! let children = vec![Node::new_text("first"), Node::new_text("second")];
//!
//! let mut found = None;
//! let _ = traverse::try_for_each_deep(&children, |child, _index, _depth| {
//!     if let Some(text) = child.text() {
//!         found = Some(text.to_owned());
//!         return ControlFlow::Break(());
//!     }
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(found.as_deref(), Some("first"));
//! ```

mod deep;
mod shallow;

pub use deep::{for_each_deep, try_for_each_deep};
pub use shallow::{filter, reduce};
