//! Property-based tests for parsing and writing trees
//!
//! These tests check the laws connecting parser and writer:
//! - Round trip: parsing the written string gives back an equal tree
//! - Idempotence: writing is stable under parse and write
//! - Leaf count: every maximal word-character run becomes one leaf

use proptest::prelude::*;
use stackwick::model::Tree;
use stackwick::parser::{ParsingErrorType, Underflow};
use stackwick::{parse, serialize};

/// Generate valid leaf names
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Taxon-like names
        "[A-Z][a-z]{1,8}(_[a-z]{1,8})?",
        // Numbers, e.g. from branch lengths
        "[0-9]{1,4}",
        // Underscores and Unicode letters
        "_[a-zA-Z0-9]{0,4}",
        "[āēīōūÅøß][a-z]{0,3}",
    ]
}

/// Generate trees of moderate size, including empty nodes
fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = name_strategy().prop_map(|name| Tree::leaf(name));
    leaf.prop_recursive(6, 64, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Tree::node)
    })
}

/// Generate separators made of ignored characters only
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(",".to_string()),
        Just(", ".to_string()),
        Just(" ".to_string()),
        Just("\n\t".to_string()),
        Just(" : ".to_string()),
        Just(";".to_string()),
    ]
}

/// Count maximal runs of word characters
fn count_word_runs(text: &str) -> usize {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|run| !run.is_empty())
        .count()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_round_trip(tree in tree_strategy()) {
            let newick = serialize(&tree);
            let parsed = parse(&newick);
            prop_assert!(parsed.is_ok(), "Failed to parse: {}", newick);
            prop_assert_eq!(parsed.unwrap(), tree);
        }

        #[test]
        fn test_serialize_is_idempotent(tree in tree_strategy()) {
            let newick = serialize(&tree);
            let reparsed = parse(&newick).unwrap();
            prop_assert_eq!(serialize(&reparsed), newick);
        }

        #[test]
        fn test_leaf_count_equals_word_runs(
            tree in tree_strategy(),
            separator in separator_strategy(),
            padding in "[ \t\n]{0,3}",
        ) {
            let input = format!("{padding}{}{padding}", serialize(&tree).replace(',', &separator));
            let parsed = parse(&input);
            prop_assert!(parsed.is_ok(), "Failed to parse: {:?}", input);

            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.num_leaves(), count_word_runs(&input));
            prop_assert_eq!(parsed, tree);
        }

        #[test]
        fn test_arbitrary_input_never_panics(input in "\\PC{0,40}") {
            // Either outcome is fine, it must just not panic
            let _ = parse(&input);
        }

        #[test]
        fn test_unbalanced_input_fails(tree in tree_strategy(), extra_close in any::<bool>()) {
            let newick = serialize(&tree);
            let unbalanced = if extra_close {
                format!("{newick})")
            } else {
                format!("({newick}")
            };
            let err = parse(&unbalanced).unwrap_err();
            let expected = if extra_close {
                (Underflow::UnmatchedClose, newick.len())
            } else {
                (Underflow::UnclosedOpen, 0)
            };
            prop_assert_eq!(*err.kind(), ParsingErrorType::EmptyStack(expected.0));
            prop_assert_eq!(err.position(), expected.1);
        }
    }
}
