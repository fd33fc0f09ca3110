//! Deep (recursive) traversal over a children sequence.

use std::ops::ControlFlow;

use crate::Node;

/// Walks every node reachable from `children`, depth-first and left to right.
///
/// The callback receives `(child, index, depth)`:
///
/// * `index` - 0-based position of the child within its immediate parent
/// * `depth` - 1 for top-level children, incremented by one per nesting level
///
/// The callback fires for an element before its children are entered
/// (pre-order), and for every text leaf. The total number of invocations
/// equals the node count of the subtree.
pub fn for_each_deep<F>(children: &[Node], mut callback: F)
where
    F: FnMut(&Node, usize, usize),
{
    let _ = try_for_each_deep(children, |child, index, depth| {
        callback(child, index, depth);
        ControlFlow::Continue(())
    });
}

/// Like [`for_each_deep`], but the callback can stop the traversal.
///
/// Returning `ControlFlow::Break(())` aborts the whole walk immediately,
/// including any pending siblings of ancestors. Returns `Break` if the
/// traversal was stopped early, `Continue` otherwise.
pub fn try_for_each_deep<F>(children: &[Node], mut f: F) -> ControlFlow<()>
where
    F: FnMut(&Node, usize, usize) -> ControlFlow<()>,
{
    walk(children, &mut f, 1)
}

fn walk<F>(children: &[Node], f: &mut F, depth: usize) -> ControlFlow<()>
where
    F: FnMut(&Node, usize, usize) -> ControlFlow<()>,
{
    for (index, child) in children.iter().enumerate() {
        f(child, index, depth)?;
        if let Node::Element(element) = child {
            walk(&element.children, f, depth + 1)?;
        }
    }
    ControlFlow::Continue(())
}
