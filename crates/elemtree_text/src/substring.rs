//! Windowed substring extraction over a children sequence.

use elemtree_ast::{Node, traverse};

/// The reduce accumulator for one level of the tree.
///
/// `matched` is the portion of the target window assembled so far, `taken`
/// its char count, and `preceding` the total char count of all text leaves
/// visited so far in flattened order.
#[derive(Debug, Default)]
struct Window {
    matched: String,
    taken: usize,
    preceding: usize,
}

/// Extracts a substring of the tree's flattened text.
///
/// Conceptually equivalent to flattening every descendant text leaf into one
/// string and taking `length` chars starting at char offset `start`, but
/// computed incrementally without building the flattened string.
///
/// Out-of-range windows are not errors: a `start` past the end of the text
/// or a `length` of 0 yield `""`, and a window reaching past the end is
/// truncated to the available chars.
///
/// ```rust
/// use elemtree_ast::Node;
/// use elemtree_text::substring;
///
/// let children = vec![
///     Node::new_text("Lorem ipsum"),
///     Node::new_element("h3", vec![Node::new_text("Foo")]),
/// ];
///
/// assert_eq!(substring(&children, 6, 5), "ipsum");
/// assert_eq!(substring(&children, 11, 3), "Foo");
/// assert_eq!(substring(&children, 100, 3), "");
/// ```
pub fn substring(children: &[Node], start: usize, length: usize) -> String {
    collect(children, start, length).matched
}

fn collect(children: &[Node], start: usize, length: usize) -> Window {
    // One level of the recursive reduce:
    //
    //                  start          length
    //                    |----------------------------|
    // |------------||------------||------------||------------|
    //     childA    ^   childB    ^   childC    ^   childD
    //           preceding     preceding     preceding
    //
    // The window overlaps childB, childC, and childD. While iterating over
    // childD, `preceding` is the char count of childA + childB + childC.
    traverse::reduce(
        children,
        |acc: Window, child, _index, _siblings| {
            let part = match child {
                // Element: find the rest of the window within its subtree,
                // shifting the window by the text that precedes it.
                Node::Element(element) => collect(
                    &element.children,
                    start.saturating_sub(acc.preceding),
                    length - acc.taken,
                ),
                Node::Text(text) => {
                    let len = text.chars().count();
                    let overlaps = start < acc.preceding + len
                        && start.saturating_add(length) > acc.preceding;
                    let matched: String = if overlaps {
                        text.chars()
                            .skip(start.saturating_sub(acc.preceding))
                            .take(length - acc.taken)
                            .collect()
                    } else {
                        String::new()
                    };
                    let taken = matched.chars().count();
                    Window {
                        matched,
                        taken,
                        preceding: len,
                    }
                }
            };
            Window {
                matched: acc.matched + &part.matched,
                taken: acc.taken + part.taken,
                preceding: acc.preceding + part.preceding,
            }
        },
        Window::default(),
    )
}
