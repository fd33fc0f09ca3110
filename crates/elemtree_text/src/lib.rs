//! # elemtree_text
//!
//! Text-level operations over an element tree: flattening all descendant
//! text leaves into one logical string, and extracting a window of that
//! string without materializing it first.
//!
//! All offsets and lengths are in `char`s, not bytes.
//!
//! ## Example
//!
//! ```rust
//! use elemtree_ast::Node;
//!
//! let children = vec![
//!     Node::new_text("Lorem ipsum"),
//!     Node::new_element("h3", vec![Node::new_text("Foo")]),
//! ];
//!
//! assert_eq!(elemtree_text::flatten(&children), "Lorem ipsumFoo");
//! assert_eq!(elemtree_text::substring(&children, 6, 5), "ipsum");
//! ```

mod flatten;
mod substring;

pub use flatten::{flatten, text_len};
pub use substring::substring;
