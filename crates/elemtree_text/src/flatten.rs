//! Flattening descendant text into one logical string.

use elemtree_ast::{Node, traverse};

/// Concatenates every text leaf under `children`, depth-first and left to
/// right. Elements contribute nothing of their own.
pub fn flatten(children: &[Node]) -> String {
    let mut out = String::new();
    traverse::for_each_deep(children, |child, _index, _depth| {
        if let Some(text) = child.text() {
            out.push_str(text);
        }
    });
    out
}

/// Total char count of the flattened string, computed without building it.
pub fn text_len(children: &[Node]) -> usize {
    traverse::reduce(
        children,
        |total, child, _index, _siblings| match child {
            Node::Text(text) => total + text.chars().count(),
            Node::Element(element) => total + text_len(&element.children),
        },
        0,
    )
}
