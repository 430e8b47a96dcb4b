//! Tree data model: a [Tree] is either a [Leaf] or a [Node].
//!
//! Trees are plain owned values. A [Node] owns its children in the
//! left-to-right order of the source text, so a tree is finite and acyclic
//! by construction. All traversals ([PreOrderIter], [Tree::depth], dropping)
//! use an explicit stack instead of recursion, so arbitrarily deep trees
//! do not exhaust the call stack.

use crate::newick::writer;
use crate::parser::tokenizer::is_valid_name;
use std::fmt;
use std::hash::{Hash, Hasher};

// =#========================================================================#=
// LEAF
// =#========================================================================$=
/// Terminal vertex of a tree carrying a name.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    /// Creates a new leaf with the given name.
    ///
    /// The name is not checked. Only names consisting of word characters
    /// (see [is_valid_name]) survive a round trip through
    /// [to_newick](crate::newick::to_newick) and
    /// [parse_str](crate::newick::parse_str), check with [Tree::is_valid].
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of this leaf
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the leaf and returns its name.
    pub fn into_name(self) -> String {
        self.name
    }
}

// =#========================================================================#=
// NODE
// =#========================================================================$=
/// Internal vertex of a tree with an ordered, possibly empty, list of children.
#[derive(PartialEq, Eq, Debug, Clone, Hash, Default)]
pub struct Node {
    children: Vec<Tree>,
}

impl Node {
    /// Creates a new node with the given children (left to right).
    pub fn new(children: Vec<Tree>) -> Self {
        Self { children }
    }

    /// Children of this node, left to right
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Number of children
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Consumes the node and returns its children.
    pub fn into_children(mut self) -> Vec<Tree> {
        std::mem::take(&mut self.children)
    }
}

impl Drop for Node {
    // The derived drop would recurse once per nesting level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(tree) = pending.pop() {
            if let Tree::Node(mut node) = tree {
                pending.append(&mut node.children);
            }
        }
    }
}

// =#========================================================================#=
// TREE
// =#========================================================================$=
/// A tree is either a [Leaf] or an internal [Node] with sub-trees.
///
/// # Example
/// ```
/// use stackwick::model::Tree;
///
/// let tree = Tree::node(vec![
///     Tree::leaf("A"),
///     Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")]),
/// ]);
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.to_string(), "(A,(B,C))");
/// ```
///
/// Equality, hashing, cloning and `Debug` walk the tree with an explicit
/// stack, like all other traversals.
pub enum Tree {
    /// Terminal vertex
    Leaf(Leaf),
    /// Internal vertex
    Node(Node),
}

impl Tree {
    /// Creates a tree consisting of a single leaf.
    pub fn leaf(name: impl Into<String>) -> Self {
        Tree::Leaf(Leaf::new(name))
    }

    /// Creates a tree with a root node with the given children.
    pub fn node(children: Vec<Tree>) -> Self {
        Tree::Node(Node::new(children))
    }

    /// Returns `true` if this is a [Leaf].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Returns `true` if this is a [Node].
    pub fn is_node(&self) -> bool {
        matches!(self, Tree::Node(_))
    }

    /// Returns the [Leaf] if this is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Tree::Leaf(leaf) => Some(leaf),
            Tree::Node(_) => None,
        }
    }

    /// Returns the [Node] if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node(node) => Some(node),
        }
    }

    /// Name of the leaf, `None` for a node.
    pub fn name(&self) -> Option<&str> {
        self.as_leaf().map(Leaf::name)
    }

    /// Children of the node, left to right (empty for a leaf).
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Node(node) => node.children(),
        }
    }

    /// Number of leaves in the tree.
    pub fn num_leaves(&self) -> usize {
        self.pre_order().filter(|tree| tree.is_leaf()).count()
    }

    /// Number of (internal) nodes in the tree.
    pub fn num_nodes(&self) -> usize {
        self.pre_order().filter(|tree| tree.is_node()).count()
    }

    /// Maximal nesting depth of nodes, equal to the maximal parenthesis
    /// nesting of the Newick string.
    ///
    /// A single leaf has depth 0, `()` and `(A,B)` have depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0)];
        while let Some((tree, depth)) = stack.pop() {
            if let Tree::Node(node) = tree {
                max_depth = max_depth.max(depth + 1);
                stack.extend(node.children().iter().map(|child| (child, depth + 1)));
            }
        }
        max_depth
    }

    /// Iterator over the leaf names, left to right.
    pub fn leaf_names(&self) -> impl Iterator<Item = &str> {
        self.pre_order().filter_map(Tree::name)
    }

    /// Iterator for pre-order traversal (parents before children, children left to right).
    pub fn pre_order(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns whether all leaf names are valid word-character runs,
    /// i.e. whether the tree survives a round trip through its Newick string.
    pub fn is_valid(&self) -> bool {
        self.leaf_names().all(is_valid_name)
    }

    /// Returns the Newick representation of this tree, see
    /// [to_newick](crate::newick::to_newick).
    pub fn to_newick(&self) -> String {
        writer::to_newick(self)
    }
}

impl From<Leaf> for Tree {
    fn from(leaf: Leaf) -> Self {
        Tree::Leaf(leaf)
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Tree::Node(node)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_newick(f, self)
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            match (left, right) {
                (Tree::Leaf(left), Tree::Leaf(right)) => {
                    if left != right {
                        return false;
                    }
                }
                (Tree::Node(left), Tree::Node(right)) => {
                    if left.num_children() != right.num_children() {
                        return false;
                    }
                    pending.extend(left.children().iter().zip(right.children()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    // Pre-order sequence of names and child counts determines the tree
    fn hash<H: Hasher>(&self, state: &mut H) {
        for vertex in self.pre_order() {
            match vertex {
                Tree::Leaf(leaf) => {
                    state.write_u8(0);
                    leaf.hash(state);
                }
                Tree::Node(node) => {
                    state.write_u8(1);
                    node.num_children().hash(state);
                }
            }
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        // Pending work, processed from the back
        enum Step<'a> {
            Visit(&'a Tree),
            /// Wrap the last `n` built trees into a node
            Build(usize),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Tree> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Tree::Leaf(leaf)) => built.push(Tree::Leaf(leaf.clone())),
                Step::Visit(Tree::Node(node)) => {
                    steps.push(Step::Build(node.num_children()));
                    steps.extend(node.children().iter().rev().map(Step::Visit));
                }
                Step::Build(num_children) => {
                    let children = built.split_off(built.len() - num_children);
                    built.push(Tree::node(children));
                }
            }
        }

        // Every Build consumes its children, leaving exactly the root
        built.pop().expect("clone builds exactly one root")
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree(")?;
        writer::write_newick(f, self)?;
        f.write_str(")")
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =#========================================================================#=
// TRAVERSAL
// =#========================================================================$=
/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited before any of its descendants, and siblings are
/// visited left to right.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        PreOrderIter { stack: vec![tree] }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;

        // Push children onto stack (rightmost first, so leftmost is processed first)
        self.stack.extend(tree.children().iter().rev());

        Some(tree)
    }
}
