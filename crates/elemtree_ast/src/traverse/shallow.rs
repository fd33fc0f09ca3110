//! Shallow (single-level) traversal over a children sequence.

use crate::Node;

/// Returns the immediate children for which `predicate` returns true.
///
/// No recursion: descendants of the children are never tested. Matches keep
/// their relative order, and the input is untouched.
pub fn filter<'a, P>(children: &'a [Node], mut predicate: P) -> Vec<&'a Node>
where
    P: FnMut(&Node, usize) -> bool,
{
    let mut result = Vec::new();
    for (index, child) in children.iter().enumerate() {
        if predicate(child, index) {
            result.push(child);
        }
    }
    result
}

/// Left fold over the immediate children.
///
/// At each step the iteratee is called with
/// `(accumulator, child, index, children)`, where `children` is the same
/// input slice on every call so an iteratee can read siblings. The
/// accumulator is rebound to each return value; an empty input returns
/// `accumulator` unchanged.
pub fn reduce<'a, A, F>(children: &'a [Node], mut iteratee: F, mut accumulator: A) -> A
where
    F: FnMut(A, &'a Node, usize, &'a [Node]) -> A,
{
    for (index, child) in children.iter().enumerate() {
        accumulator = iteratee(accumulator, child, index, children);
    }
    accumulator
}
