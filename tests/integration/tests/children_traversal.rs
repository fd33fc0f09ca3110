//! End-to-end scenarios exercising traversal and text extraction together.

use elemtree_ast::{ChildSource, Node, traverse};
use elemtree_text::{flatten, substring, text_len};
use rstest::rstest;

/// Flattened: "Lorem ipsumFooBarBazQux" (23 chars).
fn document() -> Vec<Node> {
    vec![
        Node::new_text("Lorem ipsum"),
        Node::new_element("h3", vec![Node::new_text("Foo")]),
        Node::new_element("p", vec![Node::new_text("Bar")]),
        Node::new_element("p", vec![Node::new_element("h3", vec![Node::new_text("Baz")])]),
        Node::new_element("h3", vec![Node::new_text("Qux")]),
    ]
}

mod substring_windows {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(6, 5, "ipsum")]
    #[case(14, 3, "Bar")]
    #[case(17, 3, "Baz")]
    #[case(17, 6, "BazQux")]
    #[case(0, 23, "Lorem ipsumFooBarBazQux")]
    fn matches_the_flattened_document(
        #[case] start: usize,
        #[case] length: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(substring(&document(), start, length), expected);
    }

    #[test]
    fn full_window_round_trips_through_flatten() {
        let children = document();
        let total = text_len(&children);

        assert_eq!(total, 23);
        assert_eq!(substring(&children, 0, total), flatten(&children));
    }
}

mod deep_for_each {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visits_every_node_in_preorder_with_depths() {
        let children = document();

        let mut visited = Vec::new();
        traverse::for_each_deep(&children, |child, index, depth| {
            let label = match child {
                Node::Text(text) => text.clone(),
                Node::Element(element) => element.tag.clone(),
            };
            visited.push((label, index, depth));
        });

        assert_eq!(
            visited,
            vec![
                ("Lorem ipsum".to_owned(), 0, 1),
                ("h3".to_owned(), 1, 1),
                ("Foo".to_owned(), 0, 2),
                ("p".to_owned(), 2, 1),
                ("Bar".to_owned(), 0, 2),
                ("p".to_owned(), 3, 1),
                ("h3".to_owned(), 0, 2),
                ("Baz".to_owned(), 0, 3),
                ("h3".to_owned(), 4, 1),
                ("Qux".to_owned(), 0, 2),
            ]
        );
    }

    #[test]
    fn invocation_count_equals_node_count() {
        let mut count = 0;
        traverse::for_each_deep(&document(), |_child, _index, _depth| count += 1);

        assert_eq!(count, 10);
    }
}

mod shallow_filter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selects_only_immediate_h3_elements() {
        let children = document();

        let headings = traverse::filter(&children, |child, _index| {
            matches!(child, Node::Element(element) if element.tag == "h3")
        });

        // The h3 wrapping "Baz" is nested inside a p and must not appear.
        let texts: Vec<_> = headings
            .iter()
            .map(|node| flatten(std::slice::from_ref(*node)))
            .collect();
        assert_eq!(texts, vec!["Foo", "Qux"]);
    }
}

mod normalization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalized_source_feeds_straight_into_traversal() {
        let source = ChildSource::Many(vec![
            "Lorem ipsum".into(),
            ChildSource::None,
            ChildSource::Many(vec![
                Node::new_element("h3", vec![Node::new_text("Foo")]).into(),
                Node::new_element("p", vec![Node::new_text("Bar")]).into(),
            ]),
        ]);

        let children = source.normalize();

        assert_eq!(children.len(), 3);
        assert_eq!(flatten(&children), "Lorem ipsumFooBar");
        assert_eq!(substring(&children, 11, 3), "Foo");
    }
}
