//! Data model for parsed trees.
//!
//! # Tree representation
//! A [Tree] is a sum type of exactly two cases:
//!
//! | Case | Content |
//! |------|---------|
//! | [Leaf] | Owned name (word characters) |
//! | [Node] | Ordered, possibly empty, list of child [Tree]s |
//!
//! Trees are owned values built bottom-up by the
//! [NewickParser](crate::newick::NewickParser) and never mutated afterwards.

pub mod tree;

pub use tree::{Leaf, Node, PreOrderIter, Tree};
