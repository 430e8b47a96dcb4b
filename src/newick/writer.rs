//! Newick string writing for [Tree]s.

use crate::model::Tree;
use std::fmt::{self, Write};

/// Extra buffer in Newick string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Returns the canonical Newick representation of the given tree.
///
/// A [Leaf](crate::model::Leaf) renders as its bare name, a
/// [Node](crate::model::Node) as `(` + comma-joined children + `)`.
/// No whitespace, branch lengths, or terminating semicolon are written.
/// Parsing the result gives back a tree equal to `tree`
/// (provided [Tree::is_valid]).
///
/// # Example
/// ```
/// use stackwick::model::Tree;
/// use stackwick::newick::to_newick;
///
/// let tree = Tree::node(vec![
///     Tree::leaf("Apteryx_haastii"),
///     Tree::node(vec![Tree::leaf("Apteryx_owenii"), Tree::leaf("Apteryx_rowi")]),
/// ]);
/// assert_eq!(to_newick(&tree), "(Apteryx_haastii,(Apteryx_owenii,Apteryx_rowi))");
/// assert_eq!(to_newick(&Tree::node(vec![])), "()");
/// ```
pub fn to_newick(tree: &Tree) -> String {
    let mut newick = String::with_capacity(estimate_newick_len(tree));
    // Writing into a String cannot fail
    let _ = write_newick(&mut newick, tree);
    newick
}

/// Writes the canonical Newick representation of `tree` into `out`.
///
/// See [to_newick] for the format. Used by the `Display` implementation of [Tree].
///
/// # Errors
/// Any error returned by `out`.
pub fn write_newick<W: Write + ?Sized>(out: &mut W, tree: &Tree) -> fmt::Result {
    // Pending output, processed from the back
    enum Step<'a> {
        Visit(&'a Tree),
        Comma,
        Close,
    }

    let mut steps = vec![Step::Visit(tree)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Tree::Leaf(leaf)) => out.write_str(leaf.name())?,
            Step::Visit(Tree::Node(node)) => {
                out.write_char('(')?;
                steps.push(Step::Close);
                for (i, child) in node.children().iter().enumerate().rev() {
                    steps.push(Step::Visit(child));
                    if i > 0 {
                        steps.push(Step::Comma);
                    }
                }
            }
            Step::Comma => out.write_char(',')?,
            Step::Close => out.write_char(')')?,
        }
    }

    Ok(())
}

/// Estimates the length of the Newick string for a given tree.
///
/// Used to pre-allocate string capacity. Exact for trees whose nodes all
/// have children, plus a small buffer.
pub(crate) fn estimate_newick_len(tree: &Tree) -> usize {
    // Each node: "()" plus one ',' per child after the first
    const NODE_CHARS: usize = 2;

    let mut estimate = BUFFER_CHARS;
    for vertex in tree.pre_order() {
        estimate += match vertex {
            Tree::Leaf(leaf) => leaf.name().len(),
            Tree::Node(node) => NODE_CHARS + node.num_children().saturating_sub(1),
        };
    }
    estimate
}
